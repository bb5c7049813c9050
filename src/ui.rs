//! View-model for the toolbar controls.
//!
//! Pure: everything the toolbar shows is computed here from the current
//! selections plus the live OS preference, so the logic tests without a
//! webview.

use crate::lang::Language;
use crate::theme::Theme;

/// Everything the toolbar renders: label text, icon paths, tooltips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub lang_text: &'static str,
    pub lang_icon: &'static str,
    pub lang_tooltip: String,
    pub theme_icon: &'static str,
    pub theme_tooltip: String,
}

/// Language button icon; varies only with the effective dark flag.
fn language_icon(effective_dark: bool) -> &'static str {
    if effective_dark {
        "assets/icons/language-dark.svg"
    } else {
        "assets/icons/language.svg"
    }
}

/// Compute the toolbar from the current selections and the OS preference.
/// The effective dark flag is derived on every call, never cached.
pub fn controls(lang: Language, theme: Theme, system_dark: bool) -> Controls {
    let effective_dark = theme.is_effective_dark(system_dark);
    Controls {
        lang_text: lang.display(),
        lang_icon: language_icon(effective_dark),
        lang_tooltip: lang.switch_tooltip(),
        theme_icon: theme.resolved(system_dark).icon(effective_dark),
        theme_tooltip: theme.switch_tooltip(system_dark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_defaults_on_a_light_system() {
        let c = controls(Language::default(), Theme::default(), false);
        assert_eq!(c.lang_text, "PT");
        assert_eq!(c.lang_icon, "assets/icons/language.svg");
        assert_eq!(c.lang_tooltip, "Switch to EN");
        assert_eq!(c.theme_icon, "assets/icons/theme-light.svg");
        assert_eq!(c.theme_tooltip, "Switch to Dark");
    }

    #[test]
    fn auto_on_a_dark_system_resolves_to_dark() {
        let c = controls(Language::Pt, Theme::Auto, true);
        assert_eq!(c.lang_icon, "assets/icons/language-dark.svg");
        assert_eq!(c.theme_icon, "assets/icons/theme-dark-dark.svg");
        assert_eq!(c.theme_tooltip, "Switch to Light");
    }

    #[test]
    fn explicit_dark_uses_dark_variants_regardless_of_the_system() {
        for system_dark in [false, true] {
            let c = controls(Language::En, Theme::Dark, system_dark);
            assert_eq!(c.lang_text, "EN");
            assert_eq!(c.lang_tooltip, "Switch to PT");
            assert_eq!(c.lang_icon, "assets/icons/language-dark.svg");
            assert_eq!(c.theme_icon, "assets/icons/theme-dark-dark.svg");
            assert_eq!(c.theme_tooltip, "Switch to Light");
        }
    }

    #[test]
    fn explicit_light_ignores_a_dark_system() {
        let c = controls(Language::Pt, Theme::Light, true);
        assert_eq!(c.lang_icon, "assets/icons/language.svg");
        assert_eq!(c.theme_icon, "assets/icons/theme-light.svg");
        assert_eq!(c.theme_tooltip, "Switch to Dark");
    }

    #[test]
    fn toggling_away_from_dark_lands_on_light_variants() {
        // Clicking away from dark on a light system lands on light, and
        // effective dark is now false: light theme, normal icon variant.
        let next = Theme::Dark.toggled(false);
        let c = controls(Language::Pt, next, false);
        assert_eq!(next, Theme::Light);
        assert_eq!(c.theme_icon, "assets/icons/theme-light.svg");
        assert_eq!(c.theme_tooltip, "Switch to Dark");
    }
}

//! Color theme model: light/dark plus an "auto" mode deferring to the OS.

/// Theme selection. `Auto` is only ever a persisted/initial value; user
/// toggles always land on an explicit theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    /// Storage code; also the literal `data-theme` attribute value.
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Parse a stored code. Unknown values yield `None`; callers fall back
    /// to the default.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }

    /// Label used in tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Auto => "Auto",
        }
    }

    /// Whether the window should render dark: explicit `Dark`, or `Auto`
    /// with the OS reporting dark.
    pub fn is_effective_dark(self, system_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::Auto => system_dark,
        }
    }

    /// `Auto` resolved against the OS preference; explicit themes pass
    /// through.
    pub fn resolved(self, system_dark: bool) -> Theme {
        match self {
            Theme::Auto => {
                if system_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            explicit => explicit,
        }
    }

    /// The theme a click on the toggle selects. Never `Auto`: from `Auto`
    /// the click lands on the opposite of the current OS preference.
    pub fn toggled(self, system_dark: bool) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::Auto => {
                if system_dark {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }

    /// Icon for the theme button: the theme's own glyph, in the normal or
    /// dark-mode variant. `Auto` resolves through the effective flag first
    /// (under `Auto` the effective flag *is* the OS preference).
    pub fn icon(self, effective_dark: bool) -> &'static str {
        match self {
            Theme::Light => {
                if effective_dark {
                    "assets/icons/theme-light-dark.svg"
                } else {
                    "assets/icons/theme-light.svg"
                }
            }
            Theme::Dark => {
                if effective_dark {
                    "assets/icons/theme-dark-dark.svg"
                } else {
                    "assets/icons/theme-dark.svg"
                }
            }
            Theme::Auto => self.resolved(effective_dark).icon(effective_dark),
        }
    }

    /// Tooltip for the theme button: names the theme a click would select.
    pub fn switch_tooltip(self, system_dark: bool) -> String {
        format!("Switch to {}", self.toggled(system_dark).label())
    }
}

/// Live OS color-scheme preference. An undecided OS counts as light.
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}

/// Script asserting the theme on the webview's document root. `Auto` removes
/// the attribute so the stylesheet's `prefers-color-scheme` rules apply;
/// explicit themes set the literal theme name. Both operations are
/// idempotent on the document.
pub fn document_attribute_script(theme: Theme) -> String {
    match theme {
        Theme::Auto => "document.documentElement.removeAttribute('data-theme');".to_string(),
        explicit => format!(
            "document.documentElement.setAttribute('data-theme', '{}');",
            explicit.code()
        ),
    }
}

//! The two content languages and their lookup data.

/// Content language. `Pt` is the default and the fallback target when the
/// English content fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// Storage code, also used in log fields.
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Parse a stored code. Unknown values yield `None`; callers fall back
    /// to the default.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Remote markdown file carrying this language's content.
    pub fn content_file(self) -> &'static str {
        match self {
            Language::Pt => "README.md",
            Language::En => "README-en.md",
        }
    }

    /// Label shown on the language button.
    pub fn display(self) -> &'static str {
        match self {
            Language::Pt => "PT",
            Language::En => "EN",
        }
    }

    /// The other language of the pair.
    pub fn other(self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }

    /// Tooltip for the language button.
    pub fn switch_tooltip(self) -> String {
        format!("Switch to {}", self.other().display())
    }
}

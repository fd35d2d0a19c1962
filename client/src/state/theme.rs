//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored preference first, then the system hint. Dark unless the system
    /// asks for light.
    pub fn initial(saved: Option<&str>, prefers_light: bool) -> Self {
        saved
            .and_then(Self::parse)
            .unwrap_or(if prefers_light { Self::Light } else { Self::Dark })
    }
}

/// Shared theme state. `loaded` turns true once the browser preference has
/// been read, so the default is never written over a saved choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub loaded: bool,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
    }
}

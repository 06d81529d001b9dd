use std::fmt;

use serde::Serialize;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The value written to the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interprets a persisted value.
    ///
    /// Only the exact string `"dark"` selects dark mode; anything else that
    /// was stored reads as light.
    pub fn from_persisted(value: &str) -> Self {
        if value == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_persisted() {
        assert_eq!(ThemeMode::from_persisted("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted("DARK"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(""), ThemeMode::Light);
    }

    #[test]
    fn test_toggled_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(ThemeMode::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark mode");
    }
}

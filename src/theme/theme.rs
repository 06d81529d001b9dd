//! Theme struct for building style collections.

use crate::style::{StyleValidationError, StyleValue, Styles};

/// A named collection of styles used when rendering pages.
///
/// # Example
///
/// ```rust
/// use disastersafe::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     // Visual layer
///     .add("danger", Style::new().red().bold())
///     .add("quiet", Style::new().dim())
///     // Semantic layer
///     .add("alert_high", "danger")
///     .add("timestamp", "quiet");
///
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub(crate) styles: Styles,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a theme from an existing [`Styles`] collection.
    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a concrete style or an alias, returning the theme for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Validates that every alias in this theme resolves.
    ///
    /// Renderers call this when they are built.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;

    #[test]
    fn test_theme_add_concrete_and_alias() {
        let theme = Theme::new()
            .add("accent", Style::new().cyan())
            .add("link", "accent");
        assert!(theme.styles().has("accent"));
        assert!(theme.styles().has("link"));
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_theme_validate_invalid() {
        let theme = Theme::new().add("orphan", "missing");
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_theme_default_is_empty() {
        assert!(Theme::default().styles().is_empty());
    }

    #[test]
    fn test_theme_from_styles() {
        let styles = Styles::new().add("bold", Style::new().bold());
        assert!(Theme::from_styles(styles).styles().has("bold"));
    }
}

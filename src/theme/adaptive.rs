//! Light/dark theme pairs.

use super::mode::ThemeMode;
use super::palette;
use super::theme::Theme;

/// A theme with separate light and dark variants.
///
/// The session's [`ThemeMode`] picks the variant, so every page re-skins
/// together when the mode is toggled.
///
/// ```rust
/// use disastersafe::{AdaptiveTheme, ThemeMode};
///
/// let themes = AdaptiveTheme::builtin();
/// assert!(themes.resolve(ThemeMode::Dark).styles().has("brand"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The DisasterSafe palettes.
    pub fn builtin() -> Self {
        Self::new(palette::light(), palette::dark())
    }

    /// Returns the variant for `mode`.
    pub fn resolve(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;

    #[test]
    fn test_resolve_picks_variant() {
        console::set_colors_enabled(true);
        let light = Theme::new().add("tone", Style::new().green());
        let dark = Theme::new().add("tone", Style::new().red());
        let themes = AdaptiveTheme::new(light, dark);

        let dark_out = themes
            .resolve(ThemeMode::Dark)
            .styles()
            .apply_with_mode("tone", "hi", true);
        assert!(dark_out.contains("\x1b[31"));

        let light_out = themes
            .resolve(ThemeMode::Light)
            .styles()
            .apply_with_mode("tone", "hi", true);
        assert!(light_out.contains("\x1b[32"));
    }
}

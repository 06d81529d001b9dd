//! Light/dark presentation.
//!
//! - [`ThemeMode`]: The session's light or dark flag
//! - [`Theme`]: A named collection of styles with a fluent builder
//! - [`AdaptiveTheme`]: A light/dark pair of themes, picked by mode
//! - [`detect_theme_mode`]: The ambient "prefers dark" signal
//!
//! The built-in palettes live in [`palette`].

mod adaptive;
mod detect;
mod mode;
pub mod palette;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::AdaptiveTheme;
pub use detect::{detect_theme_mode, set_theme_detector, ThemeDetector};
pub use mode::ThemeMode;
pub use theme::Theme;

//! The ambient "prefers dark" signal.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::mode::ThemeMode;

/// Function that reports the host's preferred mode.
pub type ThemeDetector = fn() -> ThemeMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector consulted when no preference has been persisted.
///
/// Useful in tests, or to pin a mode on hosts where OS detection is
/// unreliable (SSH sessions, CI).
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Asks the current detector for the host's preferred mode.
pub fn detect_theme_mode() -> ThemeMode {
    let detector = *THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_theme_detector() -> ThemeMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemeMode::Dark,
        OsThemeMode::Light => ThemeMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_theme_detector(|| ThemeMode::Dark);
        assert_eq!(detect_theme_mode(), ThemeMode::Dark);

        set_theme_detector(|| ThemeMode::Light);
        assert_eq!(detect_theme_mode(), ThemeMode::Light);
    }
}

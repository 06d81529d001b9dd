//! Configuration management for disastersafe.
//!
//! Loaded with figment from defaults, a TOML file and environment
//! variables. Command-line flags override the result.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::OutputMode;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user's config dir.
const APP_DIR_NAME: &str = "disastersafe";

/// Default preference file name.
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Narrowest layout the page templates are written for.
pub const MIN_WIDTH: usize = 40;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `DISASTERSAFE_`, nested keys
///    separated by `__`, e.g. `DISASTERSAFE_DISPLAY__WIDTH=100`)
/// 2. TOML config file at `<config_dir>/disastersafe/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

/// Where preferences are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the preference file.
    /// Defaults to `<config_dir>/disastersafe/preferences.json`
    pub preferences_path: Option<PathBuf>,
}

/// How pages are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub output: OutputMode,
    /// Column width pages are laid out for.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Auto,
            width: 78,
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("DISASTERSAFE_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::app_dir().join(CONFIG_FILE_NAME)
    }

    fn app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the display width is narrower than [`MIN_WIDTH`].
    pub fn validate(&self) -> Result<()> {
        if self.display.width < MIN_WIDTH {
            return Err(Error::ConfigValidation {
                message: format!(
                    "display.width ({}) must be at least {}",
                    self.display.width, MIN_WIDTH
                ),
            });
        }
        Ok(())
    }

    /// Get the preference file path, resolving the default if not set.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.storage
            .preferences_path
            .clone()
            .unwrap_or_else(|| Self::app_dir().join(PREFERENCES_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.output, OutputMode::Auto);
        assert_eq!(config.display.width, 78);
        assert!(config.storage.preferences_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_preferences_path() {
        let path = Config::default().preferences_path();
        assert!(path.ends_with("disastersafe/preferences.json"));
    }

    #[test]
    fn test_validate_rejects_narrow_width() {
        let mut config = Config::default();
        config.display.width = 20;
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_load_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[storage]
preferences_path = "/srv/school/prefs.json"

[display]
output = "term-debug"
width = 100
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.display.output, OutputMode::TermDebug);
        assert_eq!(config.display.width, 100);
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/srv/school/prefs.json")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\nwidth = 100\n").unwrap();

        std::env::set_var("DISASTERSAFE_DISPLAY__WIDTH", "120");
        let result = Config::load_from(Some(path));
        std::env::remove_var("DISASTERSAFE_DISPLAY__WIDTH");

        assert_eq!(result.unwrap().display.width, 120);
    }

    #[test]
    #[serial]
    fn test_invalid_width_in_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\nwidth = 10\n").unwrap();
        assert!(Config::load_from(Some(path)).is_err());
    }
}

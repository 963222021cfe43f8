//! Application configuration loading and validation.
//!
//! The application config says where the console keeps its state. It is
//! separate from the persisted settings store the console edits.
//!
//! # Example
//!
//! ```no_run
//! use pbgui::infrastructure::config::AppConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::coin_data::CoinDataConfig;
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::navigation::NavigationConfig;
use crate::error::{ConfigError, Result};

/// Overrides the settings store path.
pub const SETTINGS_FILE_ENV: &str = "PBGUI_SETTINGS_FILE";

/// Overrides the secrets file path.
pub const SECRETS_FILE_ENV: &str = "PBGUI_SECRETS_FILE";

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Persisted settings store (TOML).
    pub settings_file: String,

    /// Secrets file holding the console password.
    pub secrets_file: String,

    /// Root of instance directories and service pid files.
    pub data_dir: String,

    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Coin data API status check.
    pub coin_data: CoinDataConfig,

    pub navigation: NavigationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_file: "pbgui.toml".into(),
            secrets_file: ".pbgui/secrets.toml".into(),
            data_dir: "data".into(),
            logging: LoggingConfig::default(),
            coin_data: CoinDataConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML content.
    ///
    /// Path overrides from the environment are applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. A missing file yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if
    /// parsing or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Self::parse_toml("");
        }
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply path overrides using `lookup` to read variables.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(SETTINGS_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.settings_file = path;
        }
        if let Some(path) = lookup(SECRETS_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.secrets_file = path;
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.settings_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "settings_file",
            }
            .into());
        }
        if self.secrets_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "secrets_file",
            }
            .into());
        }
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "data_dir" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of: {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if self.coin_data.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "coin_data.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.coin_data.url()?;
        if self.navigation.dashboard.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "navigation.dashboard",
            }
            .into());
        }
        Ok(())
    }

    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(&self.settings_file)
    }

    #[must_use]
    pub fn secrets_path(&self) -> PathBuf {
        PathBuf::from(&self.secrets_file)
    }

    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(content: &str) -> Result<AppConfig> {
        let mut config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|_| None);
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn empty_content_is_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.navigation.dashboard, "dashboards");
        assert_eq!(config.coin_data.timeout_secs, 10);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"
            data_dir = "/var/lib/pbgui"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, "/var/lib/pbgui");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn overrides_replace_paths() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            SETTINGS_FILE_ENV => Some("/etc/pbgui.toml".to_string()),
            SECRETS_FILE_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.settings_file, "/etc/pbgui.toml");
        assert_eq!(config.secrets_file, ".pbgui/secrets.toml");
    }

    #[test]
    fn rejects_empty_paths() {
        let err = parse("data_dir = \"\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field: "data_dir" })
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = parse("[coin_data]\ntimeout_secs = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "coin_data.timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = parse("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_api_url() {
        let err = parse("[coin_data]\napi_url = \"not a url\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "coin_data.api_url",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            parse("data_dir = ").unwrap_err(),
            Error::Config(ConfigError::Parse(_))
        ));
    }
}

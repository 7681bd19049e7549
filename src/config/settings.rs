//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `STOREFRONT_ADMIN__API__BASE_URL`
pub const ENV_PREFIX: &str = "STOREFRONT_ADMIN";

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub notifications: NotificationConfig,
}

/// Admin REST API configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub api_token: Option<String>,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolled log files; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

/// Transient notification configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub display_ms: u64,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit configuration file and environment variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AdminError> {
        super::validation::validate_settings(self)
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> Result<String, crate::utils::errors::AdminError> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::utils::errors::AdminError::Config(e.to_string()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_seconds: 10,
                api_token: None,
                user_agent: format!("storefront-admin/{}", env!("CARGO_PKG_VERSION")),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
            notifications: NotificationConfig {
                display_ms: 3000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.notifications.display_ms, 3000);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://admin.example.com"
timeout_seconds = 3

[notifications]
display_ms = 5000
"#
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.api.base_url, "https://admin.example.com");
        assert_eq!(settings.api.timeout_seconds, 3);
        assert_eq!(settings.notifications.display_ms, 5000);
        // Untouched sections keep their defaults
        assert_eq!(settings.logging.level, "info");
        assert!(settings.api.api_token.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::from_file(&missing).is_err());
    }

    #[test]
    fn test_to_toml_contains_sections() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("[notifications]"));
        assert!(rendered.contains("display_ms = 3000"));
    }
}

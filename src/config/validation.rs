//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AdminError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;
    validate_notification_config(&settings.notifications)?;

    Ok(())
}

/// Validate admin API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AdminError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| AdminError::Config(format!("Invalid API base URL {}: {}", config.base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AdminError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(AdminError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if matches!(config.api_token.as_deref(), Some(token) if token.trim().is_empty()) {
        return Err(AdminError::Config(
            "API token must not be blank when set".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AdminError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AdminError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate notification configuration
fn validate_notification_config(config: &super::NotificationConfig) -> Result<()> {
    if config.display_ms == 0 {
        return Err(AdminError::Config(
            "Notification display time must be greater than 0".to_string()
        ));
    }

    Ok(())
}

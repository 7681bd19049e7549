//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the admin client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::EntityKind;
use crate::utils::errors::{AdminError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the application logs to file.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "storefront-admin.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AdminError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a create/update submission
pub fn log_submission(entity: EntityKind, operation: &str, success: bool, duration_ms: u64) {
    if success {
        info!(
            entity = %entity,
            operation = operation,
            duration_ms = duration_ms,
            "Submission succeeded"
        );
    } else {
        warn!(
            entity = %entity,
            operation = operation,
            duration_ms = duration_ms,
            "Submission failed"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &AdminError, context: Option<&str>) {
    error!(
        api = api,
        error = %error,
        severity = %error.severity(),
        context = context,
        "API error occurred"
    );
}

/// Log a navigation performed after a save
pub fn log_navigation(route: &str) {
    debug!(route = route, "Navigating");
}

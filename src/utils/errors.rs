//! Error handling for Storefront Admin
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;
use crate::models::EntityKind;

/// Main error type for Storefront Admin
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Network failure: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    #[error("Request failed with status {status}: {}", message.as_deref().unwrap_or("no message"))]
    RequestFailed { status: u16, message: Option<String> },

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<config::ConfigError> for AdminError {
    fn from(err: config::ConfigError) -> Self {
        AdminError::Config(err.to_string())
    }
}

/// Result type alias for Storefront Admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Message supplied by the server, if the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AdminError::RequestFailed { message: Some(message), .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Check if the error is recoverable by retrying the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            AdminError::NetworkFailure(_) => true,
            AdminError::RequestFailed { .. } => true,
            AdminError::NotFound { .. } => true,
            AdminError::InvalidResponse(_) => true,
            AdminError::InvalidStateTransition { .. } => true,
            AdminError::Config(_) => false,
            AdminError::Serialization(_) => false,
            AdminError::Io(_) => true,
            AdminError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdminError::Config(_) => ErrorSeverity::Critical,
            AdminError::UrlParse(_) => ErrorSeverity::Critical,
            AdminError::NotFound { .. } => ErrorSeverity::Info,
            AdminError::RequestFailed { status, .. } if *status < 500 => ErrorSeverity::Warning,
            AdminError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

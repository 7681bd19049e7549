//! Storefront Admin
//!
//! Entity management core for an e-commerce administration dashboard.
//! This library provides the generic create/edit/list workflow shared by the
//! user, role, banner, promotional banner, article and FAQ pages: typed models,
//! an HTTP client for the admin REST API, a submission controller that turns
//! every save into a notification and an optional navigation, and the form
//! session state each page keeps.

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AdminError, Result};

// Re-export main components for easy access
pub use models::{EntityConfig, EntityKind, ManagedEntity};
pub use services::{AdminApiClient, Notification, Navigator, ServiceFactory, SubmissionController};
pub use state::{EditPage, FormSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

//! Services module
//!
//! This module contains the API client and the workflow services built on it

pub mod api_client;
pub mod navigation;
pub mod notification;
pub mod submission;

// Re-export commonly used services
pub use api_client::AdminApiClient;
pub use navigation::{LoggingNavigator, Navigator, RecordingNavigator};
pub use notification::{Notification, NotificationQueue, QueuedNotification, Severity};
pub use submission::{Operation, SaveTarget, Submitted, SubmissionController, SubmissionError};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory<N> {
    pub api_client: AdminApiClient,
    pub controller: SubmissionController<N>,
    pub settings: Settings,
}

impl<N: Navigator> ServiceFactory<N> {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, navigator: N) -> Result<Self> {
        settings.validate()?;

        let api_client = AdminApiClient::new(&settings.api)?;
        let controller = SubmissionController::new(api_client.clone(), navigator);

        Ok(Self {
            api_client,
            controller,
            settings,
        })
    }

    /// Fresh notification queue using the configured display time
    pub fn notification_queue(&self) -> NotificationQueue {
        NotificationQueue::new(&self.settings.notifications)
    }
}

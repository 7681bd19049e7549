//! Transient notifications
//!
//! Notifications are plain values: the submission controller returns them and
//! the page layer decides how to present them. [`NotificationQueue`] is the
//! presentation used by the dashboard shell: entries disappear on their own
//! once their display time has elapsed.

use std::fmt;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use crate::config::NotificationConfig;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Failure => write!(f, "failure"),
        }
    }
}

/// A transient, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { severity: Severity::Failure, message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Notification waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedNotification {
    pub notification: Notification,
    pub expires_at: DateTime<Utc>,
}

/// Queue of visible notifications with automatic dismissal
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    display: Duration,
    entries: Vec<QueuedNotification>,
}

impl NotificationQueue {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            display: Duration::milliseconds(config.display_ms as i64),
            entries: Vec::new(),
        }
    }

    /// Show a notification starting at `now`
    pub fn push(&mut self, notification: Notification, now: DateTime<Utc>) {
        self.entries.push(QueuedNotification {
            notification,
            expires_at: now + self.display,
        });
    }

    /// Drop expired entries and return the ones still visible, oldest first
    pub fn active(&mut self, now: DateTime<Utc>) -> &[QueuedNotification] {
        self.entries.retain(|entry| entry.expires_at > now);
        &self.entries
    }

    /// Dismiss a visible notification before it expires
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).notification)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

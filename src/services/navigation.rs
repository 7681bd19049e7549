//! Navigation capability
//!
//! The submission controller never touches routing state directly; it is
//! handed a [`Navigator`] and asks it to move to a route.

use std::sync::{Arc, Mutex};
use crate::utils::logging;

/// Something that can move the user to another page
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, route: &str) {
        (**self).navigate(route)
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: &str) {
        (**self).navigate(route)
    }
}

/// Navigator that only records where it was sent
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes visited so far, oldest first
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(route.to_string());
        }
    }
}

/// Navigator for headless front ends: logs the route and stays put
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &str) {
        logging::log_navigation(route);
    }
}

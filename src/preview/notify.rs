//! User-visible notifications raised by the dashboard session.

use crate::errors::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast-style message for the dashboard shell.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// The failure behind an error notification.
    pub error: Option<DashboardError>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            error: None,
        }
    }

    pub fn error(error: DashboardError) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: error.to_string(),
            error: Some(error),
        }
    }

    pub fn is_policy_violation(&self) -> bool {
        matches!(self.error, Some(DashboardError::Policy(_)))
    }
}

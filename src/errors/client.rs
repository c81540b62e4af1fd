//! Client and session error taxonomy.

use std::fmt;

use reqwest::StatusCode;

use super::ErrorResponse;

/// A request to the profile backend did not produce the expected payload.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request never got a response (connection, timeout, TLS).
    Transport(String),
    /// The backend answered with a non-success status.
    Status {
        status: u16,
        code: String,
        message: String,
    },
    /// The response body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Build a status error from a response body, tolerating non-envelope bodies.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(envelope) => ApiError::Status {
                status: status.as_u16(),
                code: envelope.error.code,
                message: envelope.error.message,
            },
            Err(_) => ApiError::Status {
                status: status.as_u16(),
                code: status
                    .canonical_reason()
                    .unwrap_or("UNKNOWN")
                    .to_ascii_uppercase()
                    .replace(' ', "_"),
                message: body.trim().to_string(),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status {
                status,
                code,
                message,
            } => write!(f, "{} {}: {}", status, code, message),
            ApiError::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// An edit rejected locally before any request was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    /// The showcase already holds `capacity` badges.
    ShowcaseFull { capacity: usize },
    /// "Feature top badges" needs at least one earned badge.
    NoEarnedBadges,
    /// The badge is not in the user's earned set.
    BadgeNotEarned(String),
    /// No profile has been loaded yet.
    ProfileNotLoaded,
    /// Built-in templates cannot be deleted.
    TemplateReadOnly(String),
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyViolation::ShowcaseFull { capacity } => {
                write!(f, "You can only showcase up to {} badges", capacity)
            }
            PolicyViolation::NoEarnedBadges => write!(f, "You haven't earned any badges yet"),
            PolicyViolation::BadgeNotEarned(id) => write!(f, "Badge {} has not been earned", id),
            PolicyViolation::ProfileNotLoaded => write!(f, "Profile is still loading"),
            PolicyViolation::TemplateReadOnly(name) => {
                write!(f, "{} is a built-in template and cannot be deleted", name)
            }
        }
    }
}

/// Every failure the dashboard session can surface.
#[derive(Debug, Clone)]
pub enum DashboardError {
    /// Profile or catalog load failed; prior state is kept.
    Fetch(ApiError),
    /// A write was rejected or never reached the backend.
    Persistence(ApiError),
    /// The edit was refused locally.
    Policy(PolicyViolation),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Fetch(err) => write!(f, "Failed to load: {}", err),
            DashboardError::Persistence(err) => write!(f, "Failed to save: {}", err),
            DashboardError::Policy(violation) => write!(f, "{}", violation),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Fetch(err) | DashboardError::Persistence(err) => Some(err),
            DashboardError::Policy(_) => None,
        }
    }
}

impl From<PolicyViolation> for DashboardError {
    fn from(violation: PolicyViolation) -> Self {
        DashboardError::Policy(violation)
    }
}

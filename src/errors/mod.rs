//! Error handling module for the Vynn dashboard.
//!
//! The backend side maps [`AppError`] to HTTP status codes and a JSON envelope; the
//! client side ([`ApiError`], [`DashboardError`]) classifies what went wrong while
//! talking to that backend.

mod client;

pub use client::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Stable error codes carried in the envelope.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// Why the development backend refused a request.
#[derive(Debug)]
pub enum AppError {
    /// Missing or wrong PSK
    Unauthorized(String),
    /// Unknown template id
    NotFound(String),
    /// Theme or showcase payload the profile cannot hold
    Validation(String),
}

impl AppError {
    /// Status and code this error is reported with.
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED, msg.as_str())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, codes::NOT_FOUND, msg.as_str()),
            AppError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, codes::VALIDATION_ERROR, msg.as_str())
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn error_code(&self) -> &'static str {
        self.parts().1
    }

    pub fn message(&self) -> &str {
        self.parts().2
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (status, code, message) = self.parts();
        write!(f, "{} {}: {}", status.as_u16(), code, message)
    }
}

impl std::error::Error for AppError {}

/// `error` member of the envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// `{ "success": false, "error": { code, message } }`, shared by backend and client.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let (_, code, message) = err.parts();
        Self {
            success: false,
            error: ErrorDetails {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!("Request refused: {}", self);
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let err = AppError::Validation("Showcase holds at most 6 badges".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Showcase holds at most 6 badges");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.to_string(),
            "422 VALIDATION_ERROR: Showcase holds at most 6 badges"
        );
    }
}

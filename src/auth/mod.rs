//! Token authentication for the development backend.
//!
//! Compares tokens in constant time to mitigate timing attacks.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header accepted in place of a bearer token.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Auth layer function that takes the expected token as a parameter.
pub async fn token_auth_layer(
    expected_token: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // If no token is configured, allow all requests (dev mode)
    let Some(expected) = expected_token else {
        return next.run(request).await;
    };

    match provided_token(request.headers()) {
        Some(provided) if constant_time_compare(&provided, &expected) => next.run(request).await,
        Some(_) => AppError::Unauthorized("Invalid token".to_string()).into_response(),
        None => AppError::Unauthorized("Missing token".to_string()).into_response(),
    }
}

/// The bearer token, falling back to the API key header.
fn provided_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    let api_key = || {
        headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
    };

    bearer.or_else(api_key).map(str::to_string)
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

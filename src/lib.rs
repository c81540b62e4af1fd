//! Vynn dashboard
//!
//! The live-preview state core of the profile dashboard, its REST client, and a
//! development backend that serves the same API from memory.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod preview;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use client::{HttpClient, ProfileApi};
pub use config::Config;
pub use db::Repository;
pub use errors::{ApiError, AppError, DashboardError, PolicyViolation};
pub use preview::{ActionOutcome, DashboardSession, SessionOptions};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Create the development backend router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let token = state.config.api_psk.clone();

    let api_routes = Router::new()
        // Profile
        .route("/profiles/@me", get(api::get_profile).put(api::update_profile))
        .route("/profiles/@me/badges", put(api::update_badges))
        // Templates
        .route(
            "/profiles/@me/templates",
            get(api::list_templates).post(api::create_template),
        )
        .route("/profiles/@me/templates/{id}", delete(api::delete_template))
        // Catalog
        .route("/badges", get(api::list_badges))
        // Uploads
        .route("/upload/stats", get(api::upload_stats))
        .layer(middleware::from_fn(move |req, next| {
            auth::token_auth_layer(token.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

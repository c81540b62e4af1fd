//! Badge catalog API endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::BadgeCatalogEntry;
use crate::AppState;

/// GET /api/badges - List the badge catalog.
pub async fn list_badges(State(state): State<AppState>) -> ApiResult<Vec<BadgeCatalogEntry>> {
    Ok(Json(state.repo.list_badges().await))
}

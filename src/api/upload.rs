//! Upload quota endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::UploadStats;
use crate::AppState;

/// GET /api/upload/stats - Current upload usage.
pub async fn upload_stats(State(state): State<AppState>) -> ApiResult<UploadStats> {
    Ok(Json(state.repo.upload_stats().await))
}

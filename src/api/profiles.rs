//! Profile API endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::{ProfileDocument, ProfileEnvelope, UpdateBadgesRequest, UpdateThemeRequest};
use crate::AppState;

/// GET /api/profiles/@me - Get the current user and profile.
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<ProfileEnvelope> {
    Ok(Json(state.repo.get_profile().await))
}

/// PUT /api/profiles/@me - Replace the theme and frame.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateThemeRequest>,
) -> ApiResult<ProfileDocument> {
    let profile = state.repo.update_theme(request).await?;
    tracing::info!("Theme updated for {}", profile.user_id);
    Ok(Json(profile))
}

/// PUT /api/profiles/@me/badges - Replace the badge showcase.
pub async fn update_badges(
    State(state): State<AppState>,
    Json(request): Json<UpdateBadgesRequest>,
) -> ApiResult<ProfileDocument> {
    let profile = state.repo.update_badges(request).await?;
    tracing::info!(
        "Showcase updated for {} ({} badges)",
        profile.user_id,
        profile.displayed_badges.len()
    );
    Ok(Json(profile))
}

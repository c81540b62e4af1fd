//! Template API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{CreateTemplateRequest, Template};
use crate::AppState;

/// GET /api/profiles/@me/templates - List saved templates.
pub async fn list_templates(State(state): State<AppState>) -> ApiResult<Vec<Template>> {
    Ok(Json(state.repo.list_templates().await))
}

/// POST /api/profiles/@me/templates - Save a template.
pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> ApiResult<Template> {
    let template = state.repo.create_template(request).await?;
    tracing::info!("Template {} saved", template.id);
    Ok(Json(template))
}

/// DELETE /api/profiles/@me/templates/:id - Delete a saved template.
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repo.delete_template(&id).await?;
    tracing::info!("Template {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

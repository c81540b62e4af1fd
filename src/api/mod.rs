//! REST API module.
//!
//! Contains the development backend's routes and handlers following the frontend contract.

mod badges;
mod profiles;
mod templates;
mod upload;

pub use badges::*;
pub use profiles::*;
pub use templates::*;
pub use upload::*;

use axum::Json;

use crate::errors::AppError;

/// Response type that can be either a JSON payload or an error envelope.
pub type ApiResult<T> = Result<Json<T>, AppError>;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::db::{demo_seed, Repository};
    use crate::{create_router, AppState};

    fn app() -> axum::Router {
        let config = Config {
            api_psk: None,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            api_url: String::new(),
            api_token: None,
            refetch_after_persist: false,
        };
        create_router(AppState {
            repo: Arc::new(Repository::new(demo_seed())),
            config: Arc::new(config),
        })
    }

    fn put_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_update_badges_returns_profile() {
        let response = app()
            .oneshot(put_json(
                "/api/profiles/@me/badges",
                json!({"badgeIds": ["og", "premium"]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["displayedBadges"], json!(["og", "premium"]));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_non_object_theme() {
        let response = app()
            .oneshot(put_json("/api/profiles/@me", json!({"themeConfig": [1, 2]})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_delete_unknown_template_is_not_found() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/profiles/@me/templates/missing")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

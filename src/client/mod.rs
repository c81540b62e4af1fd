//! Client side of the profile REST API.
//!
//! [`ProfileApi`] is the seam the dashboard session persists through; [`HttpClient`]
//! is the production implementation.

mod http;

pub use http::*;

use std::future::Future;

use crate::errors::ApiError;
use crate::models::{
    BadgeCatalogEntry, CreateTemplateRequest, ProfileDocument, ProfileEnvelope, Template,
    UpdateBadgesRequest, UpdateThemeRequest, UploadStats,
};

/// Requests the dashboard issues against the profile backend.
///
/// Authentication is the implementation's concern; callers assume every request
/// is already authorized and treat auth failures like any other failure.
pub trait ProfileApi: Send + Sync {
    /// `GET /profiles/@me`
    fn fetch_profile(&self) -> impl Future<Output = Result<ProfileEnvelope, ApiError>> + Send;

    /// `PUT /profiles/@me`
    fn update_theme(
        &self,
        request: UpdateThemeRequest,
    ) -> impl Future<Output = Result<ProfileDocument, ApiError>> + Send;

    /// `PUT /profiles/@me/badges`
    fn update_badges(
        &self,
        request: UpdateBadgesRequest,
    ) -> impl Future<Output = Result<ProfileDocument, ApiError>> + Send;

    /// `GET /badges`
    fn fetch_badges(&self)
        -> impl Future<Output = Result<Vec<BadgeCatalogEntry>, ApiError>> + Send;

    /// `GET /profiles/@me/templates`
    fn list_templates(&self) -> impl Future<Output = Result<Vec<Template>, ApiError>> + Send;

    /// `POST /profiles/@me/templates`
    fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> impl Future<Output = Result<Template, ApiError>> + Send;

    /// `DELETE /profiles/@me/templates/:id`
    fn delete_template(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /upload/stats`
    fn upload_stats(&self) -> impl Future<Output = Result<UploadStats, ApiError>> + Send;
}

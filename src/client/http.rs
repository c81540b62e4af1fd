//! reqwest-backed [`ProfileApi`] implementation.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::ProfileApi;
use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{
    BadgeCatalogEntry, CreateTemplateRequest, ProfileDocument, ProfileEnvelope, Template,
    UpdateBadgesRequest, UpdateThemeRequest, UploadStats,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the profile backend.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Creates a client for `base_url` (e.g. `http://127.0.0.1:8080/api`).
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.api_url.clone(), config.api_token.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        tracing::debug!("Profile API returned {}", err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        Ok(response.json::<T>().await?)
    }
}

impl ProfileApi for HttpClient {
    async fn fetch_profile(&self) -> Result<ProfileEnvelope, ApiError> {
        self.send_json(self.client.get(self.url("/profiles/@me")))
            .await
    }

    async fn update_theme(&self, request: UpdateThemeRequest) -> Result<ProfileDocument, ApiError> {
        self.send_json(self.client.put(self.url("/profiles/@me")).json(&request))
            .await
    }

    async fn update_badges(
        &self,
        request: UpdateBadgesRequest,
    ) -> Result<ProfileDocument, ApiError> {
        self.send_json(
            self.client
                .put(self.url("/profiles/@me/badges"))
                .json(&request),
        )
        .await
    }

    async fn fetch_badges(&self) -> Result<Vec<BadgeCatalogEntry>, ApiError> {
        self.send_json(self.client.get(self.url("/badges"))).await
    }

    async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.send_json(self.client.get(self.url("/profiles/@me/templates")))
            .await
    }

    async fn create_template(&self, request: CreateTemplateRequest) -> Result<Template, ApiError> {
        self.send_json(
            self.client
                .post(self.url("/profiles/@me/templates"))
                .json(&request),
        )
        .await
    }

    async fn delete_template(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/profiles/@me/templates/{}", id);
        self.execute(self.client.delete(self.url(&path))).await?;
        Ok(())
    }

    async fn upload_stats(&self) -> Result<UploadStats, ApiError> {
        self.send_json(self.client.get(self.url("/upload/stats")))
            .await
    }
}

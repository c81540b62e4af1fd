//! Template models for saved and preset themes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ThemeConfig;

/// A theme template the user can apply in one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub theme_config: Arc<ThemeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
    /// Built-in templates ship with the dashboard and cannot be deleted.
    #[serde(default)]
    pub preset: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body of `POST /profiles/@me/templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub name: String,
    pub theme_config: ThemeConfig,
    #[serde(default)]
    pub frame: Option<String>,
}

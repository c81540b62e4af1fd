//! Profile and user account models matching the `GET /profiles/@me` payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Maximum number of badges a showcase may hold.
pub const SHOWCASE_CAPACITY: usize = 6;

/// Visual configuration of a profile (colors, background, effects, appearance).
///
/// The schema belongs to the renderer; the preview core only moves it around.
pub type ThemeConfig = serde_json::Value;

/// Ordered badge ids of a showcase. Shared so untouched fields keep their identity.
pub type Showcase = Arc<[String]>;

/// The authoritative per-user profile record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub user_id: String,
    #[serde(default = "empty_theme")]
    pub theme_config: Arc<ThemeConfig>,
    #[serde(default = "empty_showcase")]
    pub displayed_badges: Showcase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

impl ProfileDocument {
    /// A blank profile for a freshly registered user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            theme_config: empty_theme(),
            displayed_badges: empty_showcase(),
            entrance_text: None,
            entrance_font: None,
            frame: None,
        }
    }
}

fn empty_theme() -> Arc<ThemeConfig> {
    Arc::new(serde_json::Value::Object(serde_json::Map::new()))
}

fn empty_showcase() -> Showcase {
    Arc::from(Vec::new())
}

/// The account record that accompanies a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    /// Badge ids granted explicitly to this account.
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub booster: bool,
    #[serde(default)]
    pub supporter: bool,
    #[serde(default)]
    pub early_adopter: bool,
}

/// Response body of `GET /profiles/@me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEnvelope {
    pub user: UserAccount,
    pub profile: ProfileDocument,
}

/// Request body of `PUT /profiles/@me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThemeRequest {
    pub theme_config: ThemeConfig,
    #[serde(default)]
    pub frame: Option<String>,
}

/// Request body of `PUT /profiles/@me/badges`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBadgesRequest {
    pub badge_ids: Vec<String>,
}

//! Repository for profile, badge and template operations.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use super::Seed;
use crate::errors::AppError;
use crate::models::{
    BadgeCatalogEntry, CreateTemplateRequest, ProfileDocument, ProfileEnvelope, Template,
    UpdateBadgesRequest, UpdateThemeRequest, UploadStats, UserAccount, SHOWCASE_CAPACITY,
};

const MAX_TEMPLATE_NAME: usize = 48;

struct Inner {
    user: UserAccount,
    profile: ProfileDocument,
    badges: Vec<BadgeCatalogEntry>,
    templates: Vec<Template>,
    uploads: UploadStats,
}

/// Repository for all data operations.
pub struct Repository {
    inner: RwLock<Inner>,
}

impl Repository {
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: RwLock::new(Inner {
                user: seed.user,
                profile: seed.profile,
                badges: seed.badges,
                templates: Vec::new(),
                uploads: seed.uploads,
            }),
        }
    }

    // ==================== PROFILE OPERATIONS ====================

    /// Get the current user's account and profile.
    pub async fn get_profile(&self) -> ProfileEnvelope {
        let inner = self.inner.read().await;
        ProfileEnvelope {
            user: inner.user.clone(),
            profile: inner.profile.clone(),
        }
    }

    /// Replace the theme (and frame) of the profile.
    pub async fn update_theme(
        &self,
        request: UpdateThemeRequest,
    ) -> Result<ProfileDocument, AppError> {
        if !request.theme_config.is_object() {
            return Err(AppError::Validation(
                "themeConfig must be an object".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;
        inner.profile.theme_config = Arc::new(request.theme_config);
        inner.profile.frame = request.frame;
        Ok(inner.profile.clone())
    }

    /// Replace the showcased badges, keeping the requested order.
    pub async fn update_badges(
        &self,
        request: UpdateBadgesRequest,
    ) -> Result<ProfileDocument, AppError> {
        if request.badge_ids.len() > SHOWCASE_CAPACITY {
            return Err(AppError::Validation(format!(
                "Showcase holds at most {} badges",
                SHOWCASE_CAPACITY
            )));
        }

        let duplicate = {
            let mut seen = HashSet::new();
            request
                .badge_ids
                .iter()
                .find(|id| !seen.insert(id.as_str()))
                .cloned()
        };
        if let Some(dup) = duplicate {
            return Err(AppError::Validation(format!("Duplicate badge {}", dup)));
        }

        let mut inner = self.inner.write().await;
        if let Some(unknown) = request
            .badge_ids
            .iter()
            .find(|id| !inner.badges.iter().any(|b| b.id == **id))
        {
            return Err(AppError::Validation(format!("Unknown badge {}", unknown)));
        }

        inner.profile.displayed_badges = Arc::from(request.badge_ids);
        Ok(inner.profile.clone())
    }

    // ==================== BADGE OPERATIONS ====================

    /// List the badge catalog in its natural order.
    pub async fn list_badges(&self) -> Vec<BadgeCatalogEntry> {
        self.inner.read().await.badges.clone()
    }

    // ==================== TEMPLATE OPERATIONS ====================

    /// List the user's saved templates, oldest first.
    pub async fn list_templates(&self) -> Vec<Template> {
        self.inner.read().await.templates.clone()
    }

    /// Save a new template.
    pub async fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> Result<Template, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Template name is required".to_string()));
        }
        if name.chars().count() > MAX_TEMPLATE_NAME {
            return Err(AppError::Validation(format!(
                "Template name is limited to {} characters",
                MAX_TEMPLATE_NAME
            )));
        }
        if !request.theme_config.is_object() {
            return Err(AppError::Validation(
                "themeConfig must be an object".to_string(),
            ));
        }

        let template = Template {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            theme_config: Arc::new(request.theme_config),
            frame: request.frame,
            preset: false,
            created_at: Some(Utc::now().to_rfc3339()),
        };

        self.inner.write().await.templates.push(template.clone());
        Ok(template)
    }

    /// Delete a saved template.
    pub async fn delete_template(&self, id: &str) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.templates.len();
        inner.templates.retain(|t| t.id != id);

        if inner.templates.len() == before {
            return Err(AppError::NotFound(format!("Template {} not found", id)));
        }
        Ok(())
    }

    // ==================== UPLOAD OPERATIONS ====================

    pub async fn upload_stats(&self) -> UploadStats {
        self.inner.read().await.uploads
    }
}

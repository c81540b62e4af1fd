//! In-process [`ProfileApi`] for exercising the session without a backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::Notify;

use crate::client::ProfileApi;
use crate::errors::ApiError;
use crate::models::{
    BadgeCatalogEntry, BadgeIcon, CreateTemplateRequest, ProfileDocument, ProfileEnvelope,
    Template, UpdateBadgesRequest, UpdateThemeRequest, UploadStats, UserAccount,
};

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchProfile,
    UpdateTheme {
        theme_config: Value,
        frame: Option<String>,
    },
    UpdateBadges(Vec<String>),
    FetchBadges,
    ListTemplates,
    CreateTemplate(String),
    DeleteTemplate(String),
    UploadStats,
}

impl Call {
    pub fn is_write(&self) -> bool {
        matches!(self, Call::UpdateTheme { .. } | Call::UpdateBadges(_))
    }
}

/// How the next write behaves.
struct Plan {
    fail: bool,
    gate: Option<Arc<Notify>>,
}

pub struct MockApi {
    envelope: Mutex<ProfileEnvelope>,
    catalog: Vec<BadgeCatalogEntry>,
    templates: Mutex<Vec<Template>>,
    calls: Mutex<Vec<Call>>,
    plans: Mutex<VecDeque<Plan>>,
    fail_fetch: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockApi {
    pub fn new(envelope: ProfileEnvelope, catalog: Vec<BadgeCatalogEntry>) -> Self {
        Self {
            envelope: Mutex::new(envelope),
            catalog,
            templates: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            plans: Mutex::new(VecDeque::new()),
            fail_fetch: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Hold the next write until the returned handle is notified.
    pub fn hold_next_write(&self, fail: bool) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.plans.lock().unwrap().push_back(Plan {
            fail,
            gate: Some(Arc::clone(&gate)),
        });
        gate
    }

    /// Let the next write finish immediately with the given result.
    pub fn plan_next_write(&self, fail: bool) {
        self.plans
            .lock()
            .unwrap()
            .push_back(Plan { fail, gate: None });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    pub fn server_profile(&self) -> ProfileDocument {
        self.envelope.lock().unwrap().profile.clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_plan(&self) -> Plan {
        self.plans.lock().unwrap().pop_front().unwrap_or(Plan {
            fail: self.fail_writes.load(Ordering::SeqCst),
            gate: None,
        })
    }

    async fn run_write(&self) -> Result<(), ApiError> {
        let plan = self.next_plan();
        if let Some(gate) = plan.gate {
            gate.notified().await;
        }
        if plan.fail {
            return Err(ApiError::Status {
                status: 422,
                code: "VALIDATION_ERROR".to_string(),
                message: "rejected".to_string(),
            });
        }
        Ok(())
    }
}

impl ProfileApi for MockApi {
    async fn fetch_profile(&self) -> Result<ProfileEnvelope, ApiError> {
        self.record(Call::FetchProfile);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(self.envelope.lock().unwrap().clone())
    }

    async fn update_theme(&self, request: UpdateThemeRequest) -> Result<ProfileDocument, ApiError> {
        self.record(Call::UpdateTheme {
            theme_config: request.theme_config.clone(),
            frame: request.frame.clone(),
        });
        self.run_write().await?;

        let mut envelope = self.envelope.lock().unwrap();
        envelope.profile.theme_config = Arc::new(request.theme_config);
        envelope.profile.frame = request.frame;
        Ok(envelope.profile.clone())
    }

    async fn update_badges(
        &self,
        request: UpdateBadgesRequest,
    ) -> Result<ProfileDocument, ApiError> {
        self.record(Call::UpdateBadges(request.badge_ids.clone()));
        self.run_write().await?;

        let mut envelope = self.envelope.lock().unwrap();
        envelope.profile.displayed_badges = Arc::from(request.badge_ids);
        Ok(envelope.profile.clone())
    }

    async fn fetch_badges(&self) -> Result<Vec<BadgeCatalogEntry>, ApiError> {
        self.record(Call::FetchBadges);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(self.catalog.clone())
    }

    async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.record(Call::ListTemplates);
        Ok(self.templates.lock().unwrap().clone())
    }

    async fn create_template(&self, request: CreateTemplateRequest) -> Result<Template, ApiError> {
        self.record(Call::CreateTemplate(request.name.clone()));
        self.run_write().await?;

        let mut templates = self.templates.lock().unwrap();
        let template = Template {
            id: format!("tpl-{}", templates.len() + 1),
            name: request.name,
            theme_config: Arc::new(request.theme_config),
            frame: request.frame,
            preset: false,
            created_at: None,
        };
        templates.push(template.clone());
        Ok(template)
    }

    async fn delete_template(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteTemplate(id.to_string()));
        self.run_write().await?;
        self.templates.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn upload_stats(&self) -> Result<UploadStats, ApiError> {
        self.record(Call::UploadStats);
        Ok(UploadStats {
            upload_count: 3,
            limit: 10,
        })
    }
}

/// A catalog of plain badges with the given ids, in order.
pub fn catalog(ids: &[&str]) -> Vec<BadgeCatalogEntry> {
    ids.iter()
        .map(|id| BadgeCatalogEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: format!("The {} badge", id),
            category: "community".to_string(),
            color: "#a855f7".to_string(),
            icon: BadgeIcon::resolve("star"),
            is_system: false,
            system_key: None,
        })
        .collect()
}

/// A profile showcasing `showcase` for a user who earned `earned`.
pub fn envelope(earned: &[&str], showcase: &[&str]) -> ProfileEnvelope {
    let mut profile = ProfileDocument::new("user-1");
    profile.displayed_badges = Arc::from(
        showcase
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>(),
    );
    profile.theme_config = Arc::new(serde_json::json!({
        "colors": { "primary": "#ffffff" },
        "effects": { "snow": true }
    }));

    ProfileEnvelope {
        user: UserAccount {
            id: "user-1".to_string(),
            username: "vynn".to_string(),
            badges: earned.iter().map(|id| id.to_string()).collect(),
            ..Default::default()
        },
        profile,
    }
}

//! The dashboard session: one user's profile, draft and preview state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::badges::EarnedBadges;
use super::compositor::PreviewCompositor;
use super::draft::{DraftOverlay, Overlay};
use super::entrance::{EntranceGate, EntranceState};
use super::ledger::WriteLedger;
use super::notify::Notification;
use super::presets::presets;
use crate::client::ProfileApi;
use crate::config::Config;
use crate::errors::DashboardError;
use crate::models::{
    BadgeCatalogEntry, BadgeIcon, ProfileDocument, Showcase, Template, ThemeConfig, UploadStats,
};
use crate::preview::store::{LoadResult, ProfileStore};

/// Behaviour switches for a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Refetch the profile after each confirmed write and drop the draft once
    /// nothing is in flight.
    pub refetch_after_persist: bool,
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            refetch_after_persist: config.refetch_after_persist,
        }
    }
}

/// Everything a preview renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct PreviewSnapshot {
    pub view: Option<Arc<ProfileDocument>>,
    /// Remount key for deep color changes.
    pub color_key: u64,
    pub entrance: EntranceState,
    pub muted: bool,
}

/// A showcased badge resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseItem {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: BadgeIcon,
}

/// The theme resource written by `PUT /profiles/@me`, as overlay fields.
///
/// The default (both absent) means the stored profile shows through.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeSlot {
    pub(crate) theme_config: Option<Arc<ThemeConfig>>,
    pub(crate) frame: Option<Option<String>>,
}

fn same_arc<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

pub(crate) struct SessionState {
    pub(crate) store: ProfileStore,
    pub(crate) draft: DraftOverlay,
    pub(crate) compositor: PreviewCompositor,
    pub(crate) gate: EntranceGate,
    pub(crate) muted: bool,
    pub(crate) catalog: Vec<BadgeCatalogEntry>,
    pub(crate) templates: Vec<Template>,
    pub(crate) theme_writes: WriteLedger<ThemeSlot>,
    pub(crate) showcase_writes: WriteLedger<Option<Showcase>>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) closed: bool,
}

impl SessionState {
    fn new() -> Self {
        Self {
            store: ProfileStore::new(),
            draft: DraftOverlay::new(),
            compositor: PreviewCompositor::new(),
            gate: EntranceGate::new(),
            muted: false,
            catalog: Vec::new(),
            templates: presets(),
            theme_writes: WriteLedger::new(),
            showcase_writes: WriteLedger::new(),
            notifications: Vec::new(),
            closed: false,
        }
    }

    pub(crate) fn render_view(&mut self) -> Option<Arc<ProfileDocument>> {
        self.compositor
            .view(self.store.current(), self.draft.current())
    }

    pub(crate) fn earned(&self) -> Option<EarnedBadges> {
        self.store
            .user()
            .map(|user| EarnedBadges::derive(user, &self.catalog))
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        tracing::debug!("Notification: {}", notification.message);
        self.notifications.push(notification);
    }

    pub(crate) fn theme_slot(&self) -> ThemeSlot {
        ThemeSlot {
            theme_config: self.draft.theme_config(),
            frame: self.draft.frame(),
        }
    }

    pub(crate) fn apply_theme_slot(&mut self, slot: ThemeSlot) {
        let current = self.theme_slot();
        if same_arc(&current.theme_config, &slot.theme_config) && current.frame == slot.frame {
            return;
        }
        self.draft.update(|overlay| {
            overlay.theme_config = slot.theme_config;
            overlay.frame = slot.frame;
        });
    }

    pub(crate) fn apply_showcase(&mut self, showcase: Option<Showcase>) {
        if same_arc(&self.draft.displayed_badges(), &showcase) {
            return;
        }
        self.draft
            .update(|overlay| overlay.displayed_badges = showcase);
    }

    fn writes_in_flight(&self) -> usize {
        self.theme_writes.in_flight() + self.showcase_writes.in_flight()
    }
}

/// One user's editing session.
///
/// Owns the stored profile, the draft overlay and the preview state. The only way to
/// change them is through the session's editor actions.
pub struct DashboardSession<A> {
    pub(crate) api: A,
    pub(crate) options: SessionOptions,
    state: Mutex<SessionState>,
}

impl<A: ProfileApi> DashboardSession<A> {
    pub fn new(api: A) -> Self {
        Self::with_options(api, SessionOptions::default())
    }

    pub fn with_options(api: A, options: SessionOptions) -> Self {
        Self {
            api,
            options,
            state: Mutex::new(SessionState::new()),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the profile and replace the stored document.
    ///
    /// A failure leaves the previous document in place and stops the loading state.
    pub async fn load(&self) -> Result<(), DashboardError> {
        let ticket = {
            let mut state = self.lock();
            if state.closed {
                return Ok(());
            }
            state.store.begin_load()
        };

        let result = self.api.fetch_profile().await;

        let mut state = self.lock();
        if state.closed {
            tracing::debug!("Session closed before profile load finished");
            return Ok(());
        }

        match (state.store.finish_load(ticket, &result), result) {
            (LoadResult::Failed, Err(e)) => Err(DashboardError::Fetch(e)),
            (LoadResult::Replaced, Ok(envelope)) => {
                tracing::info!(
                    "Loaded profile for {} ({} badges showcased)",
                    envelope.user.username,
                    envelope.profile.displayed_badges.len()
                );
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Fetch the badge catalog. A failure keeps the previous catalog.
    pub async fn load_catalog(&self) -> Result<(), DashboardError> {
        let result = self.api.fetch_badges().await;

        let mut state = self.lock();
        if state.closed {
            return Ok(());
        }

        match result {
            Ok(catalog) => {
                tracing::info!("Loaded badge catalog ({} badges)", catalog.len());
                state.catalog = catalog;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load badge catalog: {}", e);
                Err(DashboardError::Fetch(e))
            }
        }
    }

    /// Fetch the user's saved templates. Presets are always listed first.
    pub async fn load_templates(&self) -> Result<(), DashboardError> {
        let result = self.api.list_templates().await;

        let mut state = self.lock();
        if state.closed {
            return Ok(());
        }

        match result {
            Ok(saved) => {
                let mut templates = presets();
                templates.extend(saved);
                state.templates = templates;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load templates: {}", e);
                Err(DashboardError::Fetch(e))
            }
        }
    }

    pub async fn upload_stats(&self) -> Result<UploadStats, DashboardError> {
        self.api.upload_stats().await.map_err(|e| {
            tracing::warn!("Failed to load upload stats: {}", e);
            DashboardError::Fetch(e)
        })
    }

    /// Refetch the profile; once nothing is in flight, drop the draft so the
    /// preview shows exactly what the backend holds.
    pub async fn reconcile(&self) -> Result<(), DashboardError> {
        self.load().await?;

        let mut state = self.lock();
        if !state.closed && state.writes_in_flight() == 0 {
            state.draft.clear();
        }
        Ok(())
    }

    /// Throw away every pending change. Answers to writes still in flight are ignored.
    pub fn discard_draft(&self) {
        let mut state = self.lock();
        state.draft.clear();
        state.theme_writes.forget();
        state.showcase_writes.forget();
    }

    /// Tear the session down; responses that arrive later change nothing.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn is_loading(&self) -> bool {
        self.lock().store.is_loading()
    }

    /// The authoritative document, ignoring the draft.
    pub fn profile(&self) -> Option<Arc<ProfileDocument>> {
        self.lock().store.current().cloned()
    }

    pub fn overlay(&self) -> Option<Arc<Overlay>> {
        self.lock().draft.current().cloned()
    }

    /// The profile as the preview renders it.
    pub fn render_view(&self) -> Option<Arc<ProfileDocument>> {
        self.lock().render_view()
    }

    pub fn color_key(&self) -> u64 {
        let mut state = self.lock();
        state.render_view();
        state.compositor.color_key()
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        let mut state = self.lock();
        let view = state.render_view();

        PreviewSnapshot {
            view,
            color_key: state.compositor.color_key(),
            entrance: state.gate.state(),
            muted: state.muted,
        }
    }

    pub fn entrance(&self) -> EntranceState {
        self.lock().gate.state()
    }

    pub fn is_muted(&self) -> bool {
        self.lock().muted
    }

    pub fn catalog(&self) -> Vec<BadgeCatalogEntry> {
        self.lock().catalog.clone()
    }

    pub fn templates(&self) -> Vec<Template> {
        self.lock().templates.clone()
    }

    pub fn earned_badges(&self) -> Option<EarnedBadges> {
        self.lock().earned()
    }

    /// The previewed showcase resolved against the catalog. Unknown ids are skipped.
    pub fn showcase_items(&self) -> Vec<ShowcaseItem> {
        let mut state = self.lock();
        let Some(view) = state.render_view() else {
            return Vec::new();
        };

        view.displayed_badges
            .iter()
            .filter_map(|id| state.catalog.iter().find(|entry| &entry.id == id))
            .map(|entry| ShowcaseItem {
                id: entry.id.clone(),
                name: entry.name.clone(),
                color: entry.color.clone(),
                icon: entry.icon.clone(),
            })
            .collect()
    }

    pub fn writes_in_flight(&self) -> usize {
        self.lock().writes_in_flight()
    }

    pub fn drain_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.lock().notifications)
    }
}

//! Holder of the authoritative profile fetched from the backend.

use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{ProfileDocument, ProfileEnvelope, UserAccount};

/// Identifies one `load` so an older response cannot overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What happened to a finished load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Replaced,
    Failed,
    Stale,
}

/// The single source of truth for persisted profile state.
///
/// There is no field-level update: the document is only ever replaced wholesale
/// by a completed load.
#[derive(Debug, Default)]
pub struct ProfileStore {
    document: Option<Arc<ProfileDocument>>,
    user: Option<UserAccount>,
    loading: bool,
    generation: u64,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current authoritative document, `None` until the first successful load.
    pub fn current(&self) -> Option<&Arc<ProfileDocument>> {
        self.document.as_ref()
    }

    pub fn user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a fetch as started.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Apply the outcome of a fetch started with `ticket`.
    ///
    /// A failure keeps whatever document was there before. Either way the loading
    /// flag drops, unless a newer load is still outstanding.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: &Result<ProfileEnvelope, ApiError>,
    ) -> LoadResult {
        if ticket.0 != self.generation {
            tracing::debug!("Discarding stale profile load #{}", ticket.0);
            return LoadResult::Stale;
        }

        self.loading = false;

        match result {
            Ok(envelope) => {
                self.document = Some(Arc::new(envelope.profile.clone()));
                self.user = Some(envelope.user.clone());
                LoadResult::Replaced
            }
            Err(e) => {
                tracing::warn!("Failed to load profile: {}", e);
                LoadResult::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(user_id: &str) -> ProfileEnvelope {
        ProfileEnvelope {
            user: UserAccount {
                id: user_id.to_string(),
                username: "vynn".to_string(),
                ..Default::default()
            },
            profile: ProfileDocument::new(user_id),
        }
    }

    #[test]
    fn test_load_replaces_document() {
        let mut store = ProfileStore::new();
        assert!(store.current().is_none());

        let ticket = store.begin_load();
        assert!(store.is_loading());

        let result = store.finish_load(ticket, &Ok(envelope("u1")));
        assert_eq!(result, LoadResult::Replaced);
        assert!(!store.is_loading());
        assert_eq!(store.current().unwrap().user_id, "u1");
        assert_eq!(store.user().unwrap().username, "vynn");
    }

    #[test]
    fn test_failed_load_keeps_prior_document() {
        let mut store = ProfileStore::new();
        let ticket = store.begin_load();
        store.finish_load(ticket, &Ok(envelope("u1")));
        let before = Arc::clone(store.current().unwrap());

        let ticket = store.begin_load();
        let result = store.finish_load(ticket, &Err(ApiError::Transport("offline".into())));

        assert_eq!(result, LoadResult::Failed);
        assert!(!store.is_loading());
        assert!(Arc::ptr_eq(store.current().unwrap(), &before));
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut store = ProfileStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        assert_eq!(
            store.finish_load(second, &Ok(envelope("new"))),
            LoadResult::Replaced
        );
        assert_eq!(
            store.finish_load(first, &Ok(envelope("old"))),
            LoadResult::Stale
        );
        assert_eq!(store.current().unwrap().user_id, "new");
    }
}

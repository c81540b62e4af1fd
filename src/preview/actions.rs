//! Editor actions: optimistic update, persist, reconcile.
//!
//! Every persisted edit follows the same steps. The new value is computed and
//! written to the draft under one lock, so the preview shows it before any request
//! leaves. The request is then awaited without holding the lock. Its answer is
//! settled through the resource's [`WriteLedger`](super::ledger::WriteLedger): a
//! rejected write rolls the draft back to whatever value is still standing, and a
//! response that lost the race to a newer write changes nothing.

use std::sync::Arc;

use super::badges::{self, Direction};
use super::ledger::WriteTicket;
use super::notify::Notification;
use super::session::{DashboardSession, SessionState, ThemeSlot};
use crate::client::ProfileApi;
use crate::errors::{ApiError, DashboardError, PolicyViolation};
use crate::models::{
    CreateTemplateRequest, Showcase, Template, UpdateBadgesRequest, UpdateThemeRequest,
};

/// What an editor action ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// A local-only change took effect.
    Applied,
    /// Nothing to do; no request was sent.
    Unchanged,
    /// The backend accepted the write.
    Persisted,
    /// Refused locally before any request.
    Rejected(PolicyViolation),
    /// The backend refused or was unreachable; the draft was rolled back.
    Failed(String),
    /// The session was closed or the draft discarded while the request was out.
    Discarded,
}

#[derive(Debug, Clone, Copy)]
enum Resource {
    Theme,
    Showcase,
}

enum Staged<R> {
    Ready(WriteTicket, R),
    Done(ActionOutcome),
}

fn reject(state: &mut SessionState, violation: PolicyViolation) -> ActionOutcome {
    tracing::debug!("Edit rejected: {}", violation);
    state.notify(Notification::error(DashboardError::Policy(violation.clone())));
    ActionOutcome::Rejected(violation)
}

impl<A: ProfileApi> DashboardSession<A> {
    /// Swap the whole theme (and frame) for the template's.
    pub async fn apply_template(&self, template: &Template) -> ActionOutcome {
        let staged = {
            let mut state = self.lock();
            if state.closed {
                return ActionOutcome::Discarded;
            }
            if state.store.current().is_none() {
                return reject(&mut state, PolicyViolation::ProfileNotLoaded);
            }

            let next = ThemeSlot {
                theme_config: Some(Arc::clone(&template.theme_config)),
                frame: Some(template.frame.clone()),
            };
            let current = state.theme_slot();
            let ticket = state.theme_writes.begin(current, next.clone());
            state.apply_theme_slot(next);

            Staged::Ready(
                ticket,
                UpdateThemeRequest {
                    theme_config: (*template.theme_config).clone(),
                    frame: template.frame.clone(),
                },
            )
        };

        let (ticket, request) = match staged {
            Staged::Ready(ticket, request) => (ticket, request),
            Staged::Done(outcome) => return outcome,
        };

        tracing::debug!("Applying template {}", template.name);
        let result = self.api.update_theme(request).await.map(|_| ());
        let message = format!("Applied template {}", template.name);
        self.finish_write(Resource::Theme, ticket, result, message)
            .await
    }

    /// Add the badge to the showcase, or remove it if it is already there.
    pub async fn toggle_badge(&self, badge_id: &str) -> ActionOutcome {
        let staged = self.stage_showcase(|showcase, state| {
            let earned = state.earned().ok_or(PolicyViolation::ProfileNotLoaded)?;
            badges::toggle(showcase, badge_id, &earned).map(Some)
        });
        self.persist_showcase(staged).await
    }

    /// Move the badge at `index` one position. Moves past either end do nothing.
    pub async fn move_badge(&self, index: usize, direction: Direction) -> ActionOutcome {
        let staged = self.stage_showcase(|showcase, _| {
            Ok(badges::move_badge(showcase, index, direction))
        });
        self.persist_showcase(staged).await
    }

    /// Fill the showcase with up to six earned badges in catalog order.
    pub async fn feature_top_badges(&self) -> ActionOutcome {
        let staged = self.stage_showcase(|showcase, state| {
            let earned = state.earned().ok_or(PolicyViolation::ProfileNotLoaded)?;
            let picked = badges::top_badges(&state.catalog, &earned)?;
            Ok((picked.as_slice() != showcase).then_some(picked))
        });
        self.persist_showcase(staged).await
    }

    pub fn set_muted(&self, muted: bool) -> ActionOutcome {
        let mut state = self.lock();
        if state.closed {
            return ActionOutcome::Discarded;
        }
        if state.muted == muted {
            return ActionOutcome::Unchanged;
        }
        state.muted = muted;
        ActionOutcome::Applied
    }

    pub fn toggle_mute(&self) -> ActionOutcome {
        let muted = self.is_muted();
        self.set_muted(!muted)
    }

    /// Put the preview back behind its entrance screen.
    pub fn replay_entrance(&self) -> ActionOutcome {
        let mut state = self.lock();
        if state.closed {
            return ActionOutcome::Discarded;
        }
        if state.gate.replay() {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Unchanged
        }
    }

    /// The viewer clicked through the entrance screen.
    pub fn enter(&self) -> ActionOutcome {
        let mut state = self.lock();
        if state.closed {
            return ActionOutcome::Discarded;
        }
        if state.gate.enter() {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Unchanged
        }
    }

    /// Save the previewed theme as a named template.
    pub async fn save_template(&self, name: &str) -> ActionOutcome {
        let request = {
            let mut state = self.lock();
            if state.closed {
                return ActionOutcome::Discarded;
            }
            let Some(view) = state.render_view() else {
                return reject(&mut state, PolicyViolation::ProfileNotLoaded);
            };
            CreateTemplateRequest {
                name: name.trim().to_string(),
                theme_config: (*view.theme_config).clone(),
                frame: view.frame.clone(),
            }
        };

        let result = self.api.create_template(request).await;

        let mut state = self.lock();
        if state.closed {
            return ActionOutcome::Discarded;
        }

        match result {
            Ok(template) => {
                tracing::info!("Saved template {} ({})", template.name, template.id);
                state.notify(Notification::success(format!(
                    "Saved template {}",
                    template.name
                )));
                state.templates.push(template);
                ActionOutcome::Persisted
            }
            Err(e) => self.persistence_failed(&mut state, e),
        }
    }

    /// Delete a saved template. The local list changes only once the backend agrees.
    pub async fn delete_template(&self, id: &str) -> ActionOutcome {
        {
            let mut state = self.lock();
            if state.closed {
                return ActionOutcome::Discarded;
            }
            let preset = state
                .templates
                .iter()
                .find(|t| t.id == id && t.preset)
                .map(|t| t.name.clone());
            if let Some(name) = preset {
                return reject(&mut state, PolicyViolation::TemplateReadOnly(name));
            }
        }

        let result = self.api.delete_template(id).await;

        let mut state = self.lock();
        if state.closed {
            return ActionOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                state.templates.retain(|t| t.id != id);
                state.notify(Notification::success("Template deleted"));
                ActionOutcome::Persisted
            }
            Err(e) => self.persistence_failed(&mut state, e),
        }
    }

    fn stage_showcase(
        &self,
        edit: impl FnOnce(&[String], &SessionState) -> Result<Option<Vec<String>>, PolicyViolation>,
    ) -> Staged<UpdateBadgesRequest> {
        let mut state = self.lock();
        if state.closed {
            return Staged::Done(ActionOutcome::Discarded);
        }

        let Some(view) = state.render_view() else {
            return Staged::Done(reject(&mut state, PolicyViolation::ProfileNotLoaded));
        };

        let next = match edit(&view.displayed_badges, &state) {
            Ok(Some(next)) => next,
            Ok(None) => return Staged::Done(ActionOutcome::Unchanged),
            Err(violation) => return Staged::Done(reject(&mut state, violation)),
        };

        let request = UpdateBadgesRequest {
            badge_ids: next.clone(),
        };
        let next: Showcase = Arc::from(next);
        let current = state.draft.displayed_badges();
        let ticket = state
            .showcase_writes
            .begin(current, Some(Arc::clone(&next)));
        state.apply_showcase(Some(next));

        Staged::Ready(ticket, request)
    }

    async fn persist_showcase(&self, staged: Staged<UpdateBadgesRequest>) -> ActionOutcome {
        let (ticket, request) = match staged {
            Staged::Ready(ticket, request) => (ticket, request),
            Staged::Done(outcome) => return outcome,
        };

        let result = self.api.update_badges(request).await.map(|_| ());
        self.finish_write(Resource::Showcase, ticket, result, "Badge showcase updated".to_string())
            .await
    }

    async fn finish_write(
        &self,
        resource: Resource,
        ticket: WriteTicket,
        result: Result<(), ApiError>,
        success: String,
    ) -> ActionOutcome {
        let outcome = {
            let mut state = self.lock();
            if state.closed {
                tracing::debug!("Session closed; ignoring {:?} write result", resource);
                return ActionOutcome::Discarded;
            }

            let accepted = result.is_ok();
            let tracked = match resource {
                Resource::Theme => match state.theme_writes.settle(ticket, accepted) {
                    Some(slot) => {
                        state.apply_theme_slot(slot);
                        true
                    }
                    None => false,
                },
                Resource::Showcase => match state.showcase_writes.settle(ticket, accepted) {
                    Some(showcase) => {
                        state.apply_showcase(showcase);
                        true
                    }
                    None => false,
                },
            };

            if !tracked {
                tracing::debug!("Draft discarded; ignoring {:?} write result", resource);
                return ActionOutcome::Discarded;
            }

            match result {
                Ok(()) => {
                    tracing::info!("{}", success);
                    state.notify(Notification::success(success));
                    ActionOutcome::Persisted
                }
                Err(e) => self.persistence_failed(&mut state, e),
            }
        };

        if outcome == ActionOutcome::Persisted && self.options.refetch_after_persist {
            if let Err(e) = self.reconcile().await {
                tracing::warn!("Failed to refresh profile after save: {}", e);
            }
        }

        outcome
    }

    fn persistence_failed(&self, state: &mut SessionState, err: ApiError) -> ActionOutcome {
        tracing::warn!("Failed to save change: {}", err);
        let message = err.to_string();
        state.notify(Notification::error(DashboardError::Persistence(err)));
        ActionOutcome::Failed(message)
    }
}

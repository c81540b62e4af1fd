//! Live-preview core of the dashboard.
//!
//! Edits land in a [`DraftOverlay`] immediately and are composed over the stored
//! profile by the [`PreviewCompositor`]; the [`DashboardSession`] persists them in the
//! background and reconciles the draft with whatever the backend decides.

mod actions;
mod badges;
mod compositor;
mod draft;
mod entrance;
mod icons;
mod ledger;
mod notify;
mod presets;
mod session;
mod store;

#[cfg(test)]
pub(crate) mod mock;

pub use actions::*;
pub use badges::{move_badge, toggle, top_badges, Direction, EarnedBadges};
pub use compositor::{compute, PreviewCompositor};
pub use draft::{DraftOverlay, Overlay};
pub use entrance::{EntranceGate, EntranceState};
pub use icons::{glyph_for, render, IconGlyph, IconRender};
pub use ledger::{WriteLedger, WriteTicket};
pub use notify::{Notification, NotificationLevel};
pub use presets::presets;
pub use session::{DashboardSession, PreviewSnapshot, SessionOptions, ShowcaseItem};
pub use store::{LoadResult, LoadTicket, ProfileStore};

//! The pending, not-yet-confirmed visual delta layered over the stored profile.

use std::sync::Arc;

use crate::models::{Showcase, ThemeConfig};

/// Sparse overlay over the mutable fields of a profile.
///
/// Any field that is `Some` replaces the stored value when the preview is composed.
/// For the optional profile fields the outer `Option` is presence in the overlay, so
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub theme_config: Option<Arc<ThemeConfig>>,
    pub displayed_badges: Option<Showcase>,
    pub entrance_text: Option<Option<String>>,
    pub entrance_font: Option<Option<String>>,
    pub frame: Option<Option<String>>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.theme_config.is_none()
            && self.displayed_badges.is_none()
            && self.entrance_text.is_none()
            && self.entrance_font.is_none()
            && self.frame.is_none()
    }
}

/// Owner of the current overlay.
///
/// Every change is visible on the very next read; an empty overlay is stored as
/// `None` so the preview falls straight back to the stored profile.
#[derive(Debug, Default)]
pub struct DraftOverlay {
    current: Option<Arc<Overlay>>,
}

impl DraftOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Arc<Overlay>> {
        self.current.as_ref()
    }

    /// Replace the overlay wholesale.
    pub fn set_overlay(&mut self, overlay: Option<Overlay>) {
        self.current = overlay.filter(|o| !o.is_empty()).map(Arc::new);
    }

    /// Drop every pending change.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Build the next overlay from the current one and install it.
    pub fn update(&mut self, edit: impl FnOnce(&mut Overlay)) {
        let mut next = self.current.as_deref().cloned().unwrap_or_default();
        edit(&mut next);
        self.set_overlay(Some(next));
    }

    pub fn theme_config(&self) -> Option<Arc<ThemeConfig>> {
        self.current.as_ref().and_then(|o| o.theme_config.clone())
    }

    pub fn frame(&self) -> Option<Option<String>> {
        self.current.as_ref().and_then(|o| o.frame.clone())
    }

    pub fn displayed_badges(&self) -> Option<Showcase> {
        self.current.as_ref().and_then(|o| o.displayed_badges.clone())
    }
}

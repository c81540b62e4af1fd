//! Derives the render view from the stored profile and the draft overlay.

use std::sync::Arc;

use serde_json::Value;

use super::draft::Overlay;
use crate::models::ProfileDocument;

/// Compose the effective profile the preview renders.
///
/// Without a profile there is nothing to render. Without an overlay the stored
/// document is returned as-is (same allocation). Otherwise each field present in
/// the overlay replaces the stored field whole; nested theme keys are not merged.
pub fn compute(
    profile: Option<&Arc<ProfileDocument>>,
    overlay: Option<&Arc<Overlay>>,
) -> Option<Arc<ProfileDocument>> {
    let profile = profile?;

    let overlay = match overlay {
        Some(overlay) if !overlay.is_empty() => overlay,
        _ => return Some(Arc::clone(profile)),
    };

    Some(Arc::new(ProfileDocument {
        user_id: profile.user_id.clone(),
        theme_config: overlay
            .theme_config
            .clone()
            .unwrap_or_else(|| Arc::clone(&profile.theme_config)),
        displayed_badges: overlay
            .displayed_badges
            .clone()
            .unwrap_or_else(|| Arc::clone(&profile.displayed_badges)),
        entrance_text: overlay
            .entrance_text
            .clone()
            .unwrap_or_else(|| profile.entrance_text.clone()),
        entrance_font: overlay
            .entrance_font
            .clone()
            .unwrap_or_else(|| profile.entrance_font.clone()),
        frame: overlay
            .frame
            .clone()
            .unwrap_or_else(|| profile.frame.clone()),
    }))
}

fn same<T>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Inputs and output of the last composition.
///
/// Holding the inputs keeps their allocations alive, so pointer comparison
/// cannot be fooled by a reused address.
#[derive(Debug)]
struct Memo {
    profile: Option<Arc<ProfileDocument>>,
    overlay: Option<Arc<Overlay>>,
    view: Option<Arc<ProfileDocument>>,
}

/// Memoizing wrapper around [`compute`].
///
/// Recomputes only when the identity of either input changes. Alongside the view it
/// tracks a color key that bumps whenever `themeConfig.colors` changes by value, so a
/// renderer can remount on deep color edits that keep the outer identity.
#[derive(Debug, Default)]
pub struct PreviewCompositor {
    memo: Option<Memo>,
    colors: Option<Value>,
    color_key: u64,
    recomputations: u64,
}

impl PreviewCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(
        &mut self,
        profile: Option<&Arc<ProfileDocument>>,
        overlay: Option<&Arc<Overlay>>,
    ) -> Option<Arc<ProfileDocument>> {
        if let Some(memo) = &self.memo {
            if same(memo.profile.as_ref(), profile) && same(memo.overlay.as_ref(), overlay) {
                return memo.view.clone();
            }
        }

        let view = compute(profile, overlay);
        self.recomputations += 1;
        self.observe_colors(view.as_deref());

        self.memo = Some(Memo {
            profile: profile.cloned(),
            overlay: overlay.cloned(),
            view: view.clone(),
        });

        view
    }

    /// Changes exactly when the effective color configuration changes.
    pub fn color_key(&self) -> u64 {
        self.color_key
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    fn observe_colors(&mut self, view: Option<&ProfileDocument>) {
        let colors = view.and_then(|v| v.theme_config.get("colors")).cloned();
        if colors != self.colors {
            self.colors = colors;
            self.color_key += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> Arc<ProfileDocument> {
        let mut doc = ProfileDocument::new("u1");
        doc.theme_config = Arc::new(json!({"colors": {"primary": "#ffffff"}, "effects": {"snow": true}}));
        doc.displayed_badges = Arc::from(vec!["a".to_string(), "b".to_string()]);
        doc.entrance_text = Some("click to enter".to_string());
        Arc::new(doc)
    }

    #[test]
    fn test_no_profile_no_view() {
        let overlay = Arc::new(Overlay {
            frame: Some(Some("neon".to_string())),
            ..Default::default()
        });
        assert!(compute(None, Some(&overlay)).is_none());
    }

    #[test]
    fn test_empty_overlay_is_identity() {
        let p = profile();
        let empty = Arc::new(Overlay::default());

        assert!(Arc::ptr_eq(&compute(Some(&p), None).unwrap(), &p));
        assert!(Arc::ptr_eq(&compute(Some(&p), Some(&empty)).unwrap(), &p));
    }

    #[test]
    fn test_theme_is_replaced_not_merged() {
        let p = profile();
        let theme = Arc::new(json!({"colors": {"primary": "#f97316"}}));
        let overlay = Arc::new(Overlay {
            theme_config: Some(Arc::clone(&theme)),
            ..Default::default()
        });

        let view = compute(Some(&p), Some(&overlay)).unwrap();

        assert!(Arc::ptr_eq(&view.theme_config, &theme));
        assert!(view.theme_config.get("effects").is_none());
    }

    #[test]
    fn test_untouched_fields_pass_through() {
        let p = profile();
        let overlay = Arc::new(Overlay {
            frame: Some(Some("neon".to_string())),
            ..Default::default()
        });

        let view = compute(Some(&p), Some(&overlay)).unwrap();

        assert!(Arc::ptr_eq(&view.displayed_badges, &p.displayed_badges));
        assert!(Arc::ptr_eq(&view.theme_config, &p.theme_config));
        assert_eq!(view.entrance_text, p.entrance_text);
        assert_eq!(view.frame.as_deref(), Some("neon"));
    }

    #[test]
    fn test_cleared_field_replaces_stored_value() {
        let mut doc = (*profile()).clone();
        doc.frame = Some("gold".to_string());
        let p = Arc::new(doc);
        let overlay = Arc::new(Overlay {
            frame: Some(None),
            entrance_text: Some(None),
            ..Default::default()
        });

        let view = compute(Some(&p), Some(&overlay)).unwrap();

        assert_eq!(view.frame, None);
        assert_eq!(view.entrance_text, None);
        assert_eq!(view.entrance_font, p.entrance_font);
    }

    #[test]
    fn test_memoized_on_identity() {
        let mut compositor = PreviewCompositor::new();
        let p = profile();
        let overlay = Arc::new(Overlay {
            frame: Some(Some("neon".to_string())),
            ..Default::default()
        });

        let first = compositor.view(Some(&p), Some(&overlay)).unwrap();
        let second = compositor.view(Some(&p), Some(&overlay)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(compositor.recomputations(), 1);

        // Equal by value but a different allocation: recompute.
        let copy = Arc::new((*overlay).clone());
        let third = compositor.view(Some(&p), Some(&copy)).unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(compositor.recomputations(), 2);
    }

    #[test]
    fn test_color_key_tracks_nested_colors() {
        let mut compositor = PreviewCompositor::new();
        let p = profile();

        compositor.view(Some(&p), None);
        let initial = compositor.color_key();

        // Effects change, colors do not.
        let same_colors = Arc::new(Overlay {
            theme_config: Some(Arc::new(json!({"colors": {"primary": "#ffffff"}}))),
            ..Default::default()
        });
        compositor.view(Some(&p), Some(&same_colors));
        assert_eq!(compositor.color_key(), initial);

        let new_colors = Arc::new(Overlay {
            theme_config: Some(Arc::new(json!({"colors": {"primary": "#000000"}}))),
            ..Default::default()
        });
        compositor.view(Some(&p), Some(&new_colors));
        assert_eq!(compositor.color_key(), initial + 1);
    }
}

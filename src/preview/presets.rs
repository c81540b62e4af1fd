//! Built-in theme templates.

use std::sync::Arc;

use serde_json::json;

use crate::models::Template;

fn preset(id: &str, name: &str, theme: serde_json::Value, frame: Option<&str>) -> Template {
    Template {
        id: format!("preset-{}", id),
        name: name.to_string(),
        theme_config: Arc::new(theme),
        frame: frame.map(str::to_string),
        preset: true,
        created_at: None,
    }
}

/// Templates every user can apply.
pub fn presets() -> Vec<Template> {
    vec![
        preset(
            "sunset",
            "Sunset",
            json!({
                "colors": {
                    "primary": "#f97316",
                    "secondary": "#fb923c",
                    "background": "#1c1917",
                    "text": "#fafaf9"
                },
                "background": { "type": "gradient", "angle": 135 },
                "effects": { "glow": true },
                "appearance": { "cardOpacity": 0.8, "borderRadius": 16 }
            }),
            Some("ember"),
        ),
        preset(
            "midnight",
            "Midnight",
            json!({
                "colors": {
                    "primary": "#6366f1",
                    "secondary": "#818cf8",
                    "background": "#0f172a",
                    "text": "#e2e8f0"
                },
                "background": { "type": "solid" },
                "effects": { "stars": true },
                "appearance": { "cardOpacity": 0.6, "borderRadius": 12 }
            }),
            None,
        ),
        preset(
            "forest",
            "Forest",
            json!({
                "colors": {
                    "primary": "#22c55e",
                    "secondary": "#4ade80",
                    "background": "#052e16",
                    "text": "#f0fdf4"
                },
                "background": { "type": "solid" },
                "effects": {},
                "appearance": { "cardOpacity": 0.9, "borderRadius": 8 }
            }),
            Some("vines"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_marked_and_unique() {
        let presets = presets();
        assert!(presets.iter().all(|t| t.preset));

        let mut ids: Vec<_> = presets.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), presets.len());
        assert_eq!(presets[0].theme_config["colors"]["primary"], "#f97316");
    }
}

//! In-memory profile storage for the development backend.
//!
//! Data lives for the lifetime of the process and starts from a demo seed.

mod repository;

pub use repository::*;

use std::sync::Arc;

use serde_json::json;

use crate::models::{
    BadgeCatalogEntry, BadgeIcon, ProfileDocument, SystemKey, UploadStats, UserAccount,
};

/// Initial contents of a [`Repository`].
#[derive(Debug, Clone)]
pub struct Seed {
    pub user: UserAccount,
    pub profile: ProfileDocument,
    pub badges: Vec<BadgeCatalogEntry>,
    pub uploads: UploadStats,
}

fn badge(
    id: &str,
    name: &str,
    category: &str,
    color: &str,
    icon: &str,
    system_key: Option<SystemKey>,
) -> BadgeCatalogEntry {
    BadgeCatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} badge", name),
        category: category.to_string(),
        color: color.to_string(),
        icon: BadgeIcon::resolve(icon),
        is_system: system_key.is_some(),
        system_key,
    }
}

/// The badge catalog every development backend starts with.
pub fn demo_badges() -> Vec<BadgeCatalogEntry> {
    vec![
        badge("premium", "Premium", "system", "#f59e0b", "crown", Some(SystemKey::Premium)),
        badge("booster", "Booster", "system", "#ec4899", "rocket", Some(SystemKey::Booster)),
        badge("supporter", "Supporter", "system", "#ef4444", "heart", Some(SystemKey::Supporter)),
        badge(
            "early_adopter",
            "Early Adopter",
            "system",
            "#8b5cf6",
            "sparkles",
            Some(SystemKey::EarlyAdopter),
        ),
        badge("developer", "Developer", "community", "#22c55e", "code", None),
        badge("bug_hunter", "Bug Hunter", "community", "#84cc16", "bug", None),
        badge("og", "OG", "community", "#eab308", "/static/badges/og.png", None),
        badge("staff", "Staff", "team", "#3b82f6", "shield", None),
    ]
}

/// A demo user with a handful of earned badges and an empty showcase.
pub fn demo_seed() -> Seed {
    let user = UserAccount {
        id: "1".to_string(),
        username: "vynn".to_string(),
        badges: vec!["developer".to_string(), "og".to_string()],
        premium: true,
        booster: false,
        supporter: false,
        early_adopter: true,
    };

    let mut profile = ProfileDocument::new(user.id.clone());
    profile.theme_config = Arc::new(json!({
        "colors": { "primary": "#a855f7", "background": "#09090b", "text": "#fafafa" },
        "background": { "type": "solid" },
        "effects": {},
        "appearance": { "cardOpacity": 0.7, "borderRadius": 12 }
    }));
    profile.entrance_text = Some("click to enter".to_string());

    Seed {
        user,
        profile,
        badges: demo_badges(),
        uploads: UploadStats {
            upload_count: 0,
            limit: 25,
        },
    }
}

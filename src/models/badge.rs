//! Badge catalog models matching the `GET /badges` payload.

use serde::{Deserialize, Serialize};

/// Automatic criterion that grants a system badge.
///
/// Criteria this client does not know decode to [`SystemKey::Other`] and are never
/// granted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SystemKey {
    Premium,
    Booster,
    Supporter,
    EarlyAdopter,
    Other(String),
}

impl SystemKey {
    pub fn as_str(&self) -> &str {
        match self {
            SystemKey::Premium => "premium",
            SystemKey::Booster => "booster",
            SystemKey::Supporter => "supporter",
            SystemKey::EarlyAdopter => "early_adopter",
            SystemKey::Other(raw) => raw,
        }
    }
}

impl From<String> for SystemKey {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "premium" => SystemKey::Premium,
            "booster" => SystemKey::Booster,
            "supporter" => SystemKey::Supporter,
            "early_adopter" => SystemKey::EarlyAdopter,
            _ => SystemKey::Other(raw),
        }
    }
}

impl From<SystemKey> for String {
    fn from(key: SystemKey) -> Self {
        match key {
            SystemKey::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Symbolic icon names the renderer knows how to draw.
///
/// Anything outside this set resolves to [`IconSymbol::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSymbol {
    Award,
    Bug,
    Code,
    Crown,
    Flame,
    Gem,
    Heart,
    Rocket,
    Shield,
    Sparkles,
    Star,
    Zap,
    Fallback,
}

impl IconSymbol {
    pub const ALL: [IconSymbol; 12] = [
        IconSymbol::Award,
        IconSymbol::Bug,
        IconSymbol::Code,
        IconSymbol::Crown,
        IconSymbol::Flame,
        IconSymbol::Gem,
        IconSymbol::Heart,
        IconSymbol::Rocket,
        IconSymbol::Shield,
        IconSymbol::Sparkles,
        IconSymbol::Star,
        IconSymbol::Zap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconSymbol::Award => "award",
            IconSymbol::Bug => "bug",
            IconSymbol::Code => "code",
            IconSymbol::Crown => "crown",
            IconSymbol::Flame => "flame",
            IconSymbol::Gem => "gem",
            IconSymbol::Heart => "heart",
            IconSymbol::Rocket => "rocket",
            IconSymbol::Shield => "shield",
            IconSymbol::Sparkles => "sparkles",
            IconSymbol::Star => "star",
            IconSymbol::Zap => "zap",
            IconSymbol::Fallback => "badge",
        }
    }

    /// Resolve a symbolic name, case-insensitively. Never fails.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(IconSymbol::Fallback)
    }
}

/// A badge icon: either a direct image reference or a symbolic name.
///
/// Resolved once when the catalog is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BadgeIcon {
    Url(String),
    /// `name` keeps the catalog's spelling so the icon encodes back unchanged.
    Symbol { symbol: IconSymbol, name: String },
}

impl BadgeIcon {
    pub fn resolve(raw: &str) -> Self {
        let looks_like_image = raw.starts_with("http://")
            || raw.starts_with("https://")
            || raw.starts_with("data:")
            || raw.starts_with('/');

        if looks_like_image {
            BadgeIcon::Url(raw.to_string())
        } else {
            BadgeIcon::Symbol {
                symbol: IconSymbol::from_name(raw),
                name: raw.to_string(),
            }
        }
    }

    pub fn symbol(&self) -> Option<IconSymbol> {
        match self {
            BadgeIcon::Symbol { symbol, .. } => Some(*symbol),
            BadgeIcon::Url(_) => None,
        }
    }
}

impl From<String> for BadgeIcon {
    fn from(raw: String) -> Self {
        BadgeIcon::resolve(&raw)
    }
}

impl From<BadgeIcon> for String {
    fn from(icon: BadgeIcon) -> Self {
        match icon {
            BadgeIcon::Url(url) => url,
            BadgeIcon::Symbol { name, .. } => name,
        }
    }
}

/// A badge definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
    pub icon: BadgeIcon,
    /// Auto-granted rather than user-curated.
    #[serde(default)]
    pub is_system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_key: Option<SystemKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_resolves_urls() {
        assert_eq!(
            BadgeIcon::resolve("https://cdn.vynn.app/badges/og.png"),
            BadgeIcon::Url("https://cdn.vynn.app/badges/og.png".to_string())
        );
        assert_eq!(
            BadgeIcon::resolve("/static/badge.svg"),
            BadgeIcon::Url("/static/badge.svg".to_string())
        );
    }

    #[test]
    fn test_icon_resolves_symbols() {
        assert_eq!(BadgeIcon::resolve("Crown").symbol(), Some(IconSymbol::Crown));
        assert_eq!(
            BadgeIcon::resolve("does-not-exist").symbol(),
            Some(IconSymbol::Fallback)
        );
        assert_eq!(BadgeIcon::resolve("/b.png").symbol(), None);
    }

    #[test]
    fn test_catalog_entry_decodes_icon_once() {
        let entry: BadgeCatalogEntry = serde_json::from_str(
            r#"{
                "id": "booster",
                "name": "Booster",
                "icon": "rocket",
                "isSystem": true,
                "systemKey": "booster"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.icon.symbol(), Some(IconSymbol::Rocket));
        assert_eq!(entry.system_key, Some(SystemKey::Booster));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["icon"], "rocket");
        assert_eq!(json["systemKey"], "booster");
    }

    #[test]
    fn test_unknown_icon_name_survives_encoding() {
        let icon: BadgeIcon = serde_json::from_str(r#""trophy""#).unwrap();
        assert_eq!(icon.symbol(), Some(IconSymbol::Fallback));
        assert_eq!(serde_json::to_value(&icon).unwrap(), "trophy");
    }

    #[test]
    fn test_unknown_system_key_does_not_break_catalog() {
        let catalog: Vec<BadgeCatalogEntry> = serde_json::from_str(
            r#"[
                {"id": "premium", "name": "Premium", "icon": "crown",
                 "isSystem": true, "systemKey": "premium"},
                {"id": "staff", "name": "Staff", "icon": "shield",
                 "isSystem": true, "systemKey": "staff"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog[0].system_key, Some(SystemKey::Premium));
        assert_eq!(
            catalog[1].system_key,
            Some(SystemKey::Other("staff".to_string()))
        );
        assert_eq!(serde_json::to_value(&catalog[1]).unwrap()["systemKey"], "staff");
    }
}

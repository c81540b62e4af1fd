//! Showcase editing rules and earned-badge derivation.

use std::collections::HashSet;

use crate::errors::PolicyViolation;
use crate::models::{BadgeCatalogEntry, SystemKey, UserAccount, SHOWCASE_CAPACITY};

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Badge ids the user has unlocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EarnedBadges {
    ids: HashSet<String>,
    /// Account order, used when no catalog is available.
    ordered: Vec<String>,
}

impl EarnedBadges {
    /// Explicit grants on the account plus every system badge whose criterion the
    /// account meets.
    pub fn derive(user: &UserAccount, catalog: &[BadgeCatalogEntry]) -> Self {
        let mut earned = Self::default();

        for id in &user.badges {
            earned.insert(id);
        }

        for entry in catalog.iter().filter(|e| e.is_system) {
            let granted = match &entry.system_key {
                Some(SystemKey::Premium) => user.premium,
                Some(SystemKey::Booster) => user.booster,
                Some(SystemKey::Supporter) => user.supporter,
                Some(SystemKey::EarlyAdopter) => user.early_adopter,
                Some(SystemKey::Other(_)) | None => false,
            };
            if granted {
                earned.insert(&entry.id);
            }
        }

        earned
    }

    fn insert(&mut self, id: &str) {
        if self.ids.insert(id.to_string()) {
            self.ordered.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Add `badge_id` to the showcase, or remove it if already present.
pub fn toggle(
    showcase: &[String],
    badge_id: &str,
    earned: &EarnedBadges,
) -> Result<Vec<String>, PolicyViolation> {
    if showcase.iter().any(|id| id == badge_id) {
        return Ok(showcase
            .iter()
            .filter(|id| *id != badge_id)
            .cloned()
            .collect());
    }

    if showcase.len() >= SHOWCASE_CAPACITY {
        return Err(PolicyViolation::ShowcaseFull {
            capacity: SHOWCASE_CAPACITY,
        });
    }

    if !earned.contains(badge_id) {
        return Err(PolicyViolation::BadgeNotEarned(badge_id.to_string()));
    }

    let mut next = showcase.to_vec();
    next.push(badge_id.to_string());
    Ok(next)
}

/// Move the badge at `index` one step. `None` when the move would leave the list.
pub fn move_badge(showcase: &[String], index: usize, direction: Direction) -> Option<Vec<String>> {
    if index >= showcase.len() {
        return None;
    }

    let target = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index.checked_add(1)?,
    };

    if target >= showcase.len() {
        return None;
    }

    let mut next = showcase.to_vec();
    next.swap(index, target);
    Some(next)
}

/// Pick up to [`SHOWCASE_CAPACITY`] earned badges in catalog order.
///
/// Without a catalog the account's own order is used.
pub fn top_badges(
    catalog: &[BadgeCatalogEntry],
    earned: &EarnedBadges,
) -> Result<Vec<String>, PolicyViolation> {
    if earned.is_empty() {
        return Err(PolicyViolation::NoEarnedBadges);
    }

    let picked: Vec<String> = if catalog.is_empty() {
        earned
            .ordered
            .iter()
            .take(SHOWCASE_CAPACITY)
            .cloned()
            .collect()
    } else {
        catalog
            .iter()
            .filter(|entry| earned.contains(&entry.id))
            .take(SHOWCASE_CAPACITY)
            .map(|entry| entry.id.clone())
            .collect()
    };

    if picked.is_empty() {
        return Err(PolicyViolation::NoEarnedBadges);
    }

    Ok(picked)
}

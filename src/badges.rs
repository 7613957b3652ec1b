//! Static achievement catalog.
//!
//! Badges are flat tagged records, loaded once at process start and
//! never mutated at runtime. The catalog carries two projections of
//! each badge: the full internal record (including the server-side
//! award rule) and a client-safe view. Mystery badge conditions are a
//! confidentiality boundary, not a UI nicety - leaking one spoils the
//! surprise and makes the award farmable. Award decisioning itself
//! lives server-side with the event logs; `condition` here is prose
//! documentation of that rule, never executable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::streaks::DEFAULT_MILESTONES;

/// Masked description shown for unearned mystery badges.
pub const MYSTERY_MASK: &str = "???";

/// Badge grouping used for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Streak,
    Academic,
    Engagement,
    Mystery,
}

/// Full badge record.
///
/// PRIVATE to the trusted side: `condition` documents the server-side
/// award rule. Client-facing code gets `PublicBadge` projections, never
/// a reference to this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDef {
    /// Unique id, stable across catalog versions
    pub id: String,

    /// Display name
    pub name: String,

    /// Display description (masked in the public view for mystery badges)
    pub description: String,

    /// Display icon
    pub icon: String,

    /// Category tag
    pub category: BadgeCategory,

    /// Mirrors `category == Mystery`; kept as a field because admin
    /// exports carry it explicitly
    pub is_mystery: bool,

    /// Human-readable award rule, evaluated server-side against event
    /// logs. Confidential for mystery badges.
    pub condition: String,

    /// XP granted when awarded
    pub xp_reward: u32,
}

/// Client-safe projection: no `condition` field at all, and mystery
/// descriptions replaced by the mask.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBadge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: BadgeCategory,
    pub is_mystery: bool,
    pub xp_reward: u32,
}

impl PublicBadge {
    fn from_def(def: &BadgeDef) -> Self {
        PublicBadge {
            id: def.id.clone(),
            name: def.name.clone(),
            description: if def.is_mystery {
                MYSTERY_MASK.to_string()
            } else {
                def.description.clone()
            },
            icon: def.icon.clone(),
            category: def.category,
            is_mystery: def.is_mystery,
            xp_reward: def.xp_reward,
        }
    }
}

/// Catalog construction and import failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate badge id: {0}")]
    DuplicateId(String),

    #[error("badge {0}: is_mystery flag disagrees with category")]
    MysteryMismatch(String),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static registry of achievement definitions.
pub struct BadgeCatalog {
    badges: Vec<BadgeDef>,
}

impl BadgeCatalog {
    /// Build a catalog, rejecting duplicate ids and mystery-flag
    /// mismatches.
    pub fn new(badges: Vec<BadgeDef>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for badge in &badges {
            if !seen.insert(badge.id.as_str()) {
                return Err(CatalogError::DuplicateId(badge.id.clone()));
            }
            if badge.is_mystery != (badge.category == BadgeCategory::Mystery) {
                return Err(CatalogError::MysteryMismatch(badge.id.clone()));
            }
        }
        Ok(BadgeCatalog { badges })
    }

    /// Import a catalog from an admin-panel JSON export
    /// (array of camelCase badge records).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let badges: Vec<BadgeDef> = serde_json::from_str(json)?;
        let catalog = Self::new(badges)?;
        log::info!(
            "[BADGES] catalog loaded count={} mystery={}",
            catalog.len(),
            catalog.mystery().count()
        );
        Ok(catalog)
    }

    /// The built-in registry, constructed once per process.
    pub fn builtin() -> &'static BadgeCatalog {
        static BUILTIN: Lazy<BadgeCatalog> = Lazy::new(|| BadgeCatalog {
            badges: builtin_defs(),
        });
        &BUILTIN
    }

    /// Number of badges in the catalog.
    pub fn len(&self) -> usize {
        self.badges.len()
    }

    /// Whether the catalog has no badges.
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Iterate all full records. Trusted/server-side use only.
    pub fn iter(&self) -> impl Iterator<Item = &BadgeDef> {
        self.badges.iter()
    }

    /// Full record by id. Trusted/server-side use only.
    pub fn get(&self, id: &str) -> Option<&BadgeDef> {
        self.badges.iter().find(|b| b.id == id)
    }

    /// Full records in one category. Trusted/server-side use only.
    pub fn by_category(&self, category: BadgeCategory) -> impl Iterator<Item = &BadgeDef> {
        self.badges.iter().filter(move |b| b.category == category)
    }

    /// The mystery partition.
    pub fn mystery(&self) -> impl Iterator<Item = &BadgeDef> {
        self.badges.iter().filter(|b| b.is_mystery)
    }

    /// The visible (non-mystery) partition.
    pub fn visible(&self) -> impl Iterator<Item = &BadgeDef> {
        self.badges.iter().filter(|b| !b.is_mystery)
    }

    /// Client-safe view of one badge.
    pub fn public_get(&self, id: &str) -> Option<PublicBadge> {
        self.get(id).map(PublicBadge::from_def)
    }

    /// Client-safe view of the whole catalog.
    pub fn public_view(&self) -> Vec<PublicBadge> {
        self.badges.iter().map(PublicBadge::from_def).collect()
    }
}

// ==================== BUILTIN DEFINITIONS ====================

/// Construction helper: derives `is_mystery` from the category so the
/// builtin set cannot get the pairing wrong.
fn badge(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    category: BadgeCategory,
    condition: &str,
    xp_reward: u32,
) -> BadgeDef {
    BadgeDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category,
        is_mystery: category == BadgeCategory::Mystery,
        condition: condition.to_string(),
        xp_reward,
    }
}

fn builtin_defs() -> Vec<BadgeDef> {
    use BadgeCategory::{Academic, Engagement, Mystery, Streak};

    vec![
        // Streak ladder - one badge per milestone (7/14/30/60/100)
        badge(
            "streak_7",
            "On a Roll",
            "Logged in 7 days in a row",
            "🔥",
            Streak,
            "Login streak reaches 7 consecutive days",
            50,
        ),
        badge(
            "streak_14",
            "Habit Formed",
            "Logged in 14 days in a row",
            "🔥",
            Streak,
            "Login streak reaches 14 consecutive days",
            100,
        ),
        badge(
            "streak_30",
            "Monthly Devotion",
            "Logged in 30 days in a row",
            "🏆",
            Streak,
            "Login streak reaches 30 consecutive days",
            250,
        ),
        badge(
            "streak_60",
            "Unstoppable",
            "Logged in 60 days in a row",
            "💎",
            Streak,
            "Login streak reaches 60 consecutive days",
            500,
        ),
        badge(
            "streak_100",
            "Centurion",
            "Logged in 100 days in a row",
            "👑",
            Streak,
            "Login streak reaches 100 consecutive days",
            1000,
        ),
        // Academic
        badge(
            "first_excellent",
            "Top Marks",
            "Scored in the Excellent band for the first time",
            "⭐",
            Academic,
            "Any outcome attainment classified Excellent",
            100,
        ),
        badge(
            "outcome_collector",
            "Outcome Collector",
            "Reached Satisfactory or better on every outcome in a course",
            "📚",
            Academic,
            "All course outcomes classified Satisfactory or higher",
            300,
        ),
        badge(
            "flawless_rubric",
            "Flawless",
            "Scored 100% on every criterion of a rubric",
            "💯",
            Academic,
            "Every rubric criterion scored at 100 percent",
            200,
        ),
        // Engagement
        badge(
            "first_submission",
            "Off the Blocks",
            "Submitted your first piece of work",
            "🚀",
            Engagement,
            "First submission recorded",
            25,
        ),
        badge(
            "early_bird",
            "Early Bird",
            "Submitted more than 24 hours before the deadline",
            "🐦",
            Engagement,
            "Submission timestamp precedes the due date by over 24 hours",
            50,
        ),
        badge(
            "level_10",
            "Double Digits",
            "Reached level 10",
            "🎖️",
            Engagement,
            "Resolved level reaches 10",
            150,
        ),
        // Mystery - conditions stay server-side
        badge(
            "mystery_night_owl",
            "Night Owl",
            "A nocturnal accomplishment",
            "🦉",
            Mystery,
            "Submission accepted between 02:00 and 04:00",
            75,
        ),
        badge(
            "mystery_comeback",
            "Comeback Story",
            "Turned it all around",
            "🔄",
            Mystery,
            "Excellent attainment on an outcome previously classified Not Yet",
            150,
        ),
    ]
}

/// Streak badge id for a milestone, if the ladder defines one.
/// Keeps award triggers and the catalog keyed the same way.
pub fn streak_badge_id(milestone: u32) -> Option<String> {
    DEFAULT_MILESTONES
        .contains(&milestone)
        .then(|| format!("streak_{}", milestone))
}

//! Level thresholds and XP-to-level resolution.
//!
//! The threshold table is the canonical mapping from level to the
//! cumulative XP required to reach it. It is a pure function of the
//! level count, generated once and cached for the process lifetime.
//! Levels 2 and 3 are hand-tuned for early-game pacing; the smooth
//! curve takes over from level 4.

use once_cell::sync::Lazy;
use serde::Serialize;

// ==================== CONSTANTS ====================

/// Highest defined level. XP past the final threshold clamps here.
pub const MAX_LEVEL: u32 = 50;

/// Cumulative XP for level 2 (hand-tuned: first level-up comes fast)
const LEVEL_2_XP: u64 = 100;

/// Cumulative XP for level 3 (hand-tuned: second level-up still cheap)
const LEVEL_3_XP: u64 = 250;

/// Curve coefficient for levels 4+: xp = floor(50 × level^1.5)
const CURVE_COEFFICIENT: f64 = 50.0;

// ==================== THRESHOLD TABLE ====================

/// One row of the level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelThreshold {
    /// Level number (1-based)
    pub level: u32,

    /// Cumulative XP required to reach this level
    pub xp_required: u64,

    /// Display title for this level's band
    pub title: &'static str,
}

static LEVEL_TABLE: Lazy<Vec<LevelThreshold>> = Lazy::new(|| build_level_table(MAX_LEVEL));

/// The canonical table for levels 1..=MAX_LEVEL, generated once.
pub fn level_table() -> &'static [LevelThreshold] {
    &LEVEL_TABLE
}

/// Build a threshold table for levels 1..=max_level.
/// Deterministic: regenerating yields an identical table.
pub fn build_level_table(max_level: u32) -> Vec<LevelThreshold> {
    (1..=max_level)
        .map(|level| LevelThreshold {
            level,
            xp_required: xp_required(level),
            title: title_for_level(level),
        })
        .collect()
}

/// Cumulative XP required to reach a level.
pub fn xp_required(level: u32) -> u64 {
    match level {
        0 | 1 => 0,
        2 => LEVEL_2_XP,
        3 => LEVEL_3_XP,
        _ => (CURVE_COEFFICIENT * f64::from(level).powf(1.5)).floor() as u64,
    }
}

/// Display title for a level.
/// Titles repeat within a band; every level gets a non-empty title.
pub fn title_for_level(level: u32) -> &'static str {
    match level {
        0..=3 => "Newcomer",
        4..=7 => "Explorer",
        8..=12 => "Apprentice",
        13..=18 => "Scholar",
        19..=24 => "Achiever",
        25..=30 => "Specialist",
        31..=36 => "Expert",
        37..=42 => "Master",
        43..=47 => "Grandmaster",
        _ => "Legend",
    }
}

// ==================== LEVEL RESOLUTION ====================

/// Highest level whose threshold is at or below the given XP total.
///
/// Floor semantics: between two thresholds the lower level wins, an
/// exact threshold hit resolves to that level. Zero or negative XP is
/// level 1; anything past the final threshold clamps to MAX_LEVEL.
pub fn resolve_level(total_xp: i64) -> u32 {
    if total_xp <= 0 {
        return 1;
    }
    let xp = total_xp as u64;

    level_table()
        .iter()
        .rev()
        .find(|t| t.xp_required <= xp)
        .map(|t| t.level)
        .unwrap_or(1)
}

/// Where an XP total sits within the level curve.
///
/// This is the per-caller "progress toward the next level" math,
/// packaged so every dashboard derives it the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    /// Current level
    pub level: u32,

    /// Display title for the current level
    pub title: &'static str,

    /// XP accumulated past the current level's threshold
    pub xp_into_level: u64,

    /// XP still needed for the next level (None at the level cap)
    pub xp_to_next: Option<u64>,

    /// Position within the current level band, 0-100 (100 at the cap)
    pub percent: u8,
}

/// Resolve level plus progress toward the next threshold.
pub fn level_progress(total_xp: i64) -> LevelProgress {
    let table = level_table();
    let level = resolve_level(total_xp);
    let current = &table[(level - 1) as usize];

    let xp = total_xp.max(0) as u64;
    let xp_into_level = xp.saturating_sub(current.xp_required);

    match table.get(level as usize) {
        Some(next) => {
            let span = next.xp_required.saturating_sub(current.xp_required);
            let percent = if span == 0 {
                100
            } else {
                ((xp_into_level as f64 / span as f64) * 100.0).round() as u8
            };
            LevelProgress {
                level,
                title: current.title,
                xp_into_level,
                xp_to_next: Some(next.xp_required.saturating_sub(xp)),
                percent,
            }
        }
        None => LevelProgress {
            level,
            title: current.title,
            xp_into_level,
            xp_to_next: None,
            percent: 100,
        },
    }
}

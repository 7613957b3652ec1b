//! Progress & scoring engine for the learning platform.
//!
//! The pure computation layer behind the incentive mechanics: raw
//! numeric and temporal inputs (accumulated XP, streak counts, rubric
//! scores, promotional events, due dates) go in, derived states
//! (current level, next milestone, attainment band, submission window,
//! multiplied rewards) come out. Callers read inputs from storage and
//! persist or display the results; nothing here touches storage,
//! sessions, or the wire.
//!
//! Every function is synchronous, side-effect-free, and recomputes
//! from its inputs on each call - derived states are never cached
//! against staleness. Time-sensitive resolvers take `now` as an
//! explicit parameter and derive everything from that one snapshot.

pub mod attainment;
pub mod badges;
pub mod bonus;
pub mod deadline;
pub mod levels;
pub mod streaks;

pub use attainment::{
    band_distribution, classify, simple_average, weighted_average, AttainmentBand,
    BandDistribution, ScoredItem,
};
pub use badges::{
    streak_badge_id, BadgeCatalog, BadgeCategory, BadgeDef, CatalogError, PublicBadge,
    MYSTERY_MASK,
};
pub use bonus::{
    active_event, apply_multiplier, countdown, effective_multiplier, BonusEvent, EventCountdown,
};
pub use deadline::{
    format_remaining, late_deadline, resolve, DeadlineStatus, SubmissionWindow, CLOSED_LABEL,
};
pub use levels::{
    build_level_table, level_progress, level_table, resolve_level, title_for_level, xp_required,
    LevelProgress, LevelThreshold, MAX_LEVEL,
};
pub use streaks::{
    last_milestone, milestone_progress, next_milestone, summarize, StreakSummary,
    DEFAULT_MILESTONES,
};

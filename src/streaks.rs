//! Streak milestone lookups and progress display math.
//!
//! The streak count itself is external state: daily-login triggers own
//! incrementing, breaking, and freezing it. This module only derives
//! display values from a count and an ascending milestone ladder.

use serde::Serialize;

/// Default milestone ladder, in days.
pub const DEFAULT_MILESTONES: [u32; 5] = [7, 14, 30, 60, 100];

/// Smallest milestone strictly greater than the count.
/// None once the whole ladder has been reached or passed.
pub fn next_milestone(count: u32, milestones: &[u32]) -> Option<u32> {
    milestones.iter().copied().find(|&m| m > count)
}

/// Largest milestone already reached (at or below the count).
pub fn last_milestone(count: u32, milestones: &[u32]) -> Option<u32> {
    milestones.iter().copied().take_while(|&m| m <= count).last()
}

/// Position between the previous milestone (or 0) and the next,
/// as a whole percentage 0-100, rounded to nearest.
///
/// 100 once every milestone is passed (an empty ladder counts as
/// passed). A degenerate ladder where next equals previous also reads
/// as 100 rather than dividing by zero.
pub fn milestone_progress(count: u32, milestones: &[u32]) -> u32 {
    let Some(next) = next_milestone(count, milestones) else {
        return 100;
    };
    let prev = last_milestone(count, milestones).unwrap_or(0);
    if next == prev {
        return 100;
    }

    let into = f64::from(count.saturating_sub(prev));
    let span = f64::from(next - prev);
    (into / span * 100.0).round() as u32
}

/// One-call display bundle for streak widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Current consecutive-day count (echoed back, never mutated here)
    pub count: u32,

    /// Next milestone to chase (None = ladder cleared)
    pub next_milestone: Option<u32>,

    /// Progress toward the next milestone, 0-100
    pub progress: u32,
}

/// Derive the full display summary for a streak count.
pub fn summarize(count: u32, milestones: &[u32]) -> StreakSummary {
    StreakSummary {
        count,
        next_milestone: next_milestone(count, milestones),
        progress: milestone_progress(count, milestones),
    }
}

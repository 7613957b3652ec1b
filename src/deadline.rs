//! Submission deadline windows.
//!
//! A deadline has three states driven purely by the clock: open, a
//! late-acceptance window, and closed. Nothing is persisted - the
//! state is recomputed from `now` on every evaluation, and the whole
//! status (window, flags, countdown) derives from that single
//! snapshot so a display can never straddle a transition.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Countdown text once the late deadline has passed.
pub const CLOSED_LABEL: &str = "Closed";

/// Where "now" falls relative to a due date and its late window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionWindow {
    /// Before (or at) the due date: accepted, on time
    Open,
    /// Past due but within the grace period: accepted, flagged late
    LateWindow,
    /// Past the late deadline: rejected
    Closed,
}

/// Fully derived view of a deadline at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineStatus {
    /// Which window `now` falls in
    pub window: SubmissionWindow,

    /// Whether a submission made right now is accepted
    pub accepts_submissions: bool,

    /// Whether a submission made right now is flagged late
    pub is_late: bool,

    /// The boundary still ahead: the due date while open, the late
    /// deadline during the window, None once closed
    pub closes_at: Option<DateTime<Utc>>,

    /// Humanized countdown to `closes_at`, or the closed literal
    pub time_remaining: String,
}

/// The instant the late window ends: due date plus the grace period.
pub fn late_deadline(due_at: DateTime<Utc>, late_window_hours: u32) -> DateTime<Utc> {
    due_at + Duration::hours(i64::from(late_window_hours))
}

/// Evaluate a deadline against a single `now` snapshot.
///
/// The due instant itself still counts as on-time; the late window is
/// the half-open interval (due, late_deadline]. A zero-hour grace
/// period collapses the window to a single instant - the states still
/// transition logically, the middle one just has zero width.
pub fn resolve(
    due_at: DateTime<Utc>,
    late_window_hours: u32,
    now: DateTime<Utc>,
) -> DeadlineStatus {
    let closes = late_deadline(due_at, late_window_hours);

    if now <= due_at {
        DeadlineStatus {
            window: SubmissionWindow::Open,
            accepts_submissions: true,
            is_late: false,
            closes_at: Some(due_at),
            time_remaining: format_remaining(due_at - now),
        }
    } else if now <= closes {
        DeadlineStatus {
            window: SubmissionWindow::LateWindow,
            accepts_submissions: true,
            is_late: true,
            closes_at: Some(closes),
            time_remaining: format_remaining(closes - now),
        }
    } else {
        DeadlineStatus {
            window: SubmissionWindow::Closed,
            accepts_submissions: false,
            is_late: true,
            closes_at: None,
            time_remaining: CLOSED_LABEL.to_string(),
        }
    }
}

/// Humanize a countdown: "3d 4h", "2h 5m", "4m 30s", "45s".
/// Negative spans clamp to "0s".
pub fn format_remaining(remaining: Duration) -> String {
    let total_secs = remaining.num_seconds().max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

//! XP reward multipliers and promotional bonus windows.
//!
//! Bonus events are time-boxed promotions that multiply XP rewards.
//! Their lifecycle (creation, deactivation) belongs to the admin
//! workflow; this module only reads them. Eligibility needs both the
//! `is_active` flag and the time window; the countdown view trusts the
//! time bound alone, so an event whose flag has not been flipped yet
//! still shows as ended.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ==================== MULTIPLIER ====================

/// Apply a reward multiplier to a base XP amount.
///
/// Fractional products truncate toward zero, never round. A multiplier
/// of exactly 1 is an identity; values below 1 are honored as a
/// reduction if ever supplied. The defined event catalog only uses
/// multipliers above 1 - that is a caller convention, not an engine
/// invariant.
pub fn apply_multiplier(base_xp: u32, multiplier: f64) -> u32 {
    (f64::from(base_xp) * multiplier).floor() as u32
}

// ==================== BONUS EVENTS ====================

/// Time-boxed promotional event multiplying XP rewards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusEvent {
    /// Display title, e.g. "Double XP Weekend"
    pub title: String,

    /// Reward multiplier applied while the event is in effect
    pub multiplier: f64,

    /// Window start (inclusive)
    pub starts_at: DateTime<Utc>,

    /// Window end (inclusive)
    pub ends_at: DateTime<Utc>,

    /// Eligibility flag owned by the admin workflow
    pub is_active: bool,
}

impl BonusEvent {
    /// Is the instant inside [starts_at, ends_at]?
    pub fn in_window(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now && now <= self.ends_at
    }
}

/// The single event that is active and inside its window right now.
///
/// At most one event is expected to qualify. Overlapping active
/// windows are a data problem upstream: the first match wins and the
/// overlap is logged, not reconciled.
pub fn active_event(events: &[BonusEvent], now: DateTime<Utc>) -> Option<&BonusEvent> {
    let mut qualifying = events.iter().filter(|e| e.is_active && e.in_window(now));
    let first = qualifying.next();
    if first.is_some() && qualifying.next().is_some() {
        log::warn!(
            "[BONUS] overlapping active windows at={} picked=\"{}\"",
            now,
            first.map(|e| e.title.as_str()).unwrap_or("")
        );
    }
    first
}

/// Multiplier currently in effect.
///
/// 1.0 when no event qualifies - "no active event" means the identity
/// multiplier, never zero.
pub fn effective_multiplier(events: &[BonusEvent], now: DateTime<Utc>) -> f64 {
    active_event(events, now).map(|e| e.multiplier).unwrap_or(1.0)
}

// ==================== COUNTDOWN ====================

/// Display view of an event's remaining time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCountdown {
    /// Time left until the window closes (zero once ended)
    pub remaining: Duration,

    /// The time bound has passed, whatever the stored flag says
    pub ended: bool,
}

/// Remaining time for display, derived from a single `now` snapshot.
///
/// The time bound is authoritative here even if `is_active` has not
/// been flipped by the admin workflow yet. The flag stays
/// authoritative for eligibility (see `active_event`).
pub fn countdown(event: &BonusEvent, now: DateTime<Utc>) -> EventCountdown {
    let remaining = event.ends_at - now;
    EventCountdown {
        ended: remaining <= Duration::zero(),
        remaining: remaining.max(Duration::zero()),
    }
}

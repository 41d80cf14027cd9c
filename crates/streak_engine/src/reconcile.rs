//! Streak reconciliation.
//!
//! The streak is an incrementally maintained counter, not a value derived
//! from the ledger on every read. Two rules keep it honest:
//!
//! - [`apply_transition`] runs after each toggle and moves the counter by
//!   one when today's entry flips. It never looks at earlier days, so a
//!   user returning after a gap still counts up from the stale value.
//! - [`reconcile`] runs before the leaderboard is materialized and zeroes
//!   any streak whose last fully completed day is older than yesterday.

use chrono::NaiveDate;
use entities::{DailyLogEntry, UserRecord};

/// How a day's `fully_completed` flag changed after a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTransition {
    /// The day just became fully completed.
    Completed,
    /// The day was fully completed and no longer is.
    Reopened,
    /// The flag kept its value.
    Unchanged,
}

impl CompletionTransition {
    /// Classifies a flag change.
    pub fn between(before: bool, after: bool) -> Self {
        match (before, after) {
            (false, true) => Self::Completed,
            (true, false) => Self::Reopened,
            _ => Self::Unchanged,
        }
    }
}

/// Applies a day's transition to the streak counter.
pub fn apply_transition(streak: u32, transition: CompletionTransition) -> u32 {
    match transition {
        CompletionTransition::Completed => streak.saturating_add(1),
        CompletionTransition::Reopened => streak.saturating_sub(1),
        CompletionTransition::Unchanged => streak,
    }
}

/// Returns the latest day whose entry is marked fully completed.
///
/// Picks the maximum date rather than the last appended entry so that an
/// out-of-order ledger still yields the chronologically latest day.
pub fn last_fully_completed(logs: &[DailyLogEntry]) -> Option<NaiveDate> {
    logs.iter()
        .filter(|log| log.fully_completed)
        .map(|log| log.date)
        .max()
}

/// Returns true if a completion on `date` still keeps a streak alive on `today`.
pub fn keeps_streak_alive(date: NaiveDate, today: NaiveDate) -> bool {
    date == today || today.pred_opt() == Some(date)
}

/// Computes the streak a user should have on `today`.
///
/// Users with a zero streak or an empty ledger are left untouched. Anyone
/// else keeps their counter only if their last fully completed day is
/// today or yesterday.
pub fn reconcile(user: &UserRecord, today: NaiveDate) -> u32 {
    if user.current_streak == 0 || user.daily_logs.is_empty() {
        return user.current_streak;
    }

    match last_fully_completed(&user.daily_logs) {
        Some(date) if keeps_streak_alive(date, today) => user.current_streak,
        _ => 0,
    }
}

//! Daily log entity definitions.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{HabitDefinition, HabitId};

/// One calendar day of a user's ledger.
///
/// `fully_completed` is a cached value. It is refreshed when a habit is
/// toggled on that day and is otherwise left alone, so it may describe an
/// older habit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLogEntry {
    /// UTC calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Ids checked on this day. May contain ids of removed habits.
    pub completed_habits: BTreeSet<HabitId>,
    /// Whether every habit was checked when the entry was last recomputed.
    pub fully_completed: bool,
}

impl DailyLogEntry {
    /// Creates an empty entry for the given day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            completed_habits: BTreeSet::new(),
            fully_completed: false,
        }
    }

    /// Returns true if the habit was checked on this day.
    pub fn is_checked(&self, habit_id: &HabitId) -> bool {
        self.completed_habits.contains(habit_id)
    }

    /// Checks or unchecks a habit. Returns true if the set changed.
    pub fn set_checked(&mut self, habit_id: HabitId, checked: bool) -> bool {
        if checked {
            self.completed_habits.insert(habit_id)
        } else {
            self.completed_habits.remove(&habit_id)
        }
    }

    /// Returns true if every habit in `habits` is checked.
    ///
    /// An empty habit list is always covered.
    pub fn covers(&self, habits: &[HabitDefinition]) -> bool {
        habits.iter().all(|habit| self.is_checked(&habit.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_set_checked_reports_changes() {
        let mut entry = DailyLogEntry::new(day());
        assert!(entry.set_checked("h1".into(), true));
        assert!(!entry.set_checked("h1".into(), true));
        assert!(entry.set_checked("h1".into(), false));
        assert!(!entry.set_checked("h1".into(), false));
        assert!(entry.completed_habits.is_empty());
    }

    #[test]
    fn test_covers() {
        let habits = vec![
            HabitDefinition::new("h1", "Water"),
            HabitDefinition::new("h2", "Workout"),
        ];
        let mut entry = DailyLogEntry::new(day());
        entry.set_checked("h1".into(), true);
        entry.set_checked("stale".into(), true);
        assert!(!entry.covers(&habits));

        entry.set_checked("h2".into(), true);
        assert!(entry.covers(&habits));
        assert!(DailyLogEntry::new(day()).covers(&[]));
    }

    #[test]
    fn test_date_serialization() {
        let entry = DailyLogEntry::new(day());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["fully_completed"], false);
    }
}

//! Daily log ledger operations.
//!
//! These functions mutate a [`UserRecord`] in memory. Persisting the result
//! is the caller's job.

use chrono::{DateTime, NaiveDate, Utc};
use entities::{DailyLogEntry, HabitDefinition, HabitId, UserRecord, WeightSample};

use crate::reconcile::{self, CompletionTransition};

/// Result of toggling a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Streak after the toggle.
    pub current_streak: u32,
    /// Whether today is now fully completed.
    pub fully_completed: bool,
    /// How today's completion flag moved.
    pub transition: CompletionTransition,
}

/// Finds the entry for `date`, appending an empty one if there is none.
pub fn entry_for_day(logs: &mut Vec<DailyLogEntry>, date: NaiveDate) -> &mut DailyLogEntry {
    let index = match logs.iter().position(|log| log.date == date) {
        Some(index) => index,
        None => {
            logs.push(DailyLogEntry::new(date));
            logs.len() - 1
        }
    };
    &mut logs[index]
}

/// Recomputes `fully_completed` against the given (current) habit list.
pub fn recompute_completion(
    habits: &[HabitDefinition],
    entry: &mut DailyLogEntry,
) -> CompletionTransition {
    let before = entry.fully_completed;
    entry.fully_completed = entry.covers(habits);
    CompletionTransition::between(before, entry.fully_completed)
}

/// Checks or unchecks a habit on `today` and moves the streak accordingly.
///
/// The habit id is not required to be in the user's current list.
pub fn toggle_habit(
    user: &mut UserRecord,
    habit_id: HabitId,
    checked: bool,
    today: NaiveDate,
) -> ToggleOutcome {
    let entry = entry_for_day(&mut user.daily_logs, today);
    entry.set_checked(habit_id, checked);

    let transition = recompute_completion(&user.habits, entry);
    let fully_completed = entry.fully_completed;
    user.current_streak = reconcile::apply_transition(user.current_streak, transition);

    ToggleOutcome {
        current_streak: user.current_streak,
        fully_completed,
        transition,
    }
}

/// Appends a weight sample. The value is stored as given.
pub fn log_weight(user: &mut UserRecord, value: f64, at: DateTime<Utc>) -> &[WeightSample] {
    user.weights.push(WeightSample::new(value, at));
    &user.weights
}

/// Replaces the habit template.
///
/// Habits with a blank title are dropped, as are repeats of an id already
/// kept. Existing log entries keep their cached completion flags.
pub fn replace_habits(user: &mut UserRecord, habits: Vec<HabitDefinition>) -> &[HabitDefinition] {
    let mut kept: Vec<HabitDefinition> = Vec::with_capacity(habits.len());
    for habit in habits {
        if habit.has_blank_title() || kept.iter().any(|k| k.id == habit.id) {
            continue;
        }
        kept.push(habit);
    }
    user.habits = kept;
    &user.habits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn user(habit_ids: &[&str]) -> UserRecord {
        let habits = habit_ids
            .iter()
            .map(|id| HabitDefinition::new(*id, format!("Habit {id}")))
            .collect();
        UserRecord::new("alice", "alice@example.com").with_habits(habits)
    }

    #[test]
    fn test_entry_for_day_creates_once() {
        let mut logs = Vec::new();
        entry_for_day(&mut logs, today()).set_checked("h1".into(), true);
        entry_for_day(&mut logs, today()).set_checked("h2".into(), true);

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].completed_habits.len(), 2);
    }

    #[test]
    fn test_two_habit_scenario() {
        let mut user = user(&["h1", "h2"]);
        user.current_streak = 3;

        let first = toggle_habit(&mut user, "h1".into(), true, today());
        assert!(!first.fully_completed);
        assert_eq!(first.current_streak, 3);
        assert_eq!(first.transition, CompletionTransition::Unchanged);

        let second = toggle_habit(&mut user, "h2".into(), true, today());
        assert!(second.fully_completed);
        assert_eq!(second.current_streak, 4);
        assert_eq!(second.transition, CompletionTransition::Completed);

        let log = user.log_for(today()).unwrap();
        let ids: Vec<&str> = log.completed_habits.iter().map(HabitId::as_str).collect();
        assert_eq!(ids, vec!["h1", "h2"]);
    }

    #[test]
    fn test_toggle_on_then_off_leaves_streak() {
        let mut user = user(&["h1", "h2"]);
        user.current_streak = 2;

        toggle_habit(&mut user, "h1".into(), true, today());
        let outcome = toggle_habit(&mut user, "h1".into(), false, today());

        assert_eq!(outcome.current_streak, 2);
        assert!(!outcome.fully_completed);
        assert!(user.log_for(today()).unwrap().completed_habits.is_empty());
    }

    #[test]
    fn test_unchecking_completed_day_decrements() {
        let mut user = user(&["h1"]);
        toggle_habit(&mut user, "h1".into(), true, today());
        assert_eq!(user.current_streak, 1);

        let outcome = toggle_habit(&mut user, "h1".into(), false, today());
        assert_eq!(outcome.transition, CompletionTransition::Reopened);
        assert_eq!(outcome.current_streak, 0);

        let outcome = toggle_habit(&mut user, "h1".into(), false, today());
        assert_eq!(outcome.current_streak, 0);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut once = user(&["h1", "h2"]);
        toggle_habit(&mut once, "h1".into(), true, today());
        toggle_habit(&mut once, "h2".into(), true, today());

        let mut twice = once.clone();
        let outcome = toggle_habit(&mut twice, "h2".into(), true, today());

        assert_eq!(outcome.transition, CompletionTransition::Unchanged);
        assert_eq!(once.current_streak, twice.current_streak);
        assert_eq!(once.daily_logs, twice.daily_logs);
    }

    #[test]
    fn test_repeated_uncheck_is_idempotent() {
        let mut once = user(&["h1", "h2"]);
        once.current_streak = 4;
        toggle_habit(&mut once, "h1".into(), true, today());
        toggle_habit(&mut once, "h2".into(), true, today());
        toggle_habit(&mut once, "h2".into(), false, today());
        assert_eq!(once.current_streak, 4);

        let mut twice = once.clone();
        let outcome = toggle_habit(&mut twice, "h2".into(), false, today());

        assert_eq!(outcome.transition, CompletionTransition::Unchanged);
        assert!(!outcome.fully_completed);
        assert_eq!(once.current_streak, twice.current_streak);
        assert_eq!(once.daily_logs, twice.daily_logs);
    }

    #[test]
    fn test_empty_habit_list_is_always_complete() {
        let mut user = user(&[]);
        let outcome = toggle_habit(&mut user, "anything".into(), false, today());

        assert!(outcome.fully_completed);
        assert_eq!(outcome.current_streak, 1);

        let mut entry = DailyLogEntry::new(today());
        recompute_completion(&[], &mut entry);
        assert!(entry.fully_completed);
    }

    #[test]
    fn test_unknown_habit_id_is_recorded_but_ignored() {
        let mut user = user(&["h1"]);
        let outcome = toggle_habit(&mut user, "ghost".into(), true, today());

        assert!(!outcome.fully_completed);
        assert!(user
            .log_for(today())
            .unwrap()
            .is_checked(&HabitId::new("ghost")));
    }

    #[test]
    fn test_completion_after_gap_still_increments() {
        let mut user = user(&["h1"]);
        user.current_streak = 5;
        let mut old = DailyLogEntry::new(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        old.fully_completed = true;
        user.daily_logs.push(old);

        let outcome = toggle_habit(&mut user, "h1".into(), true, today());
        assert_eq!(outcome.current_streak, 6);
    }

    #[test]
    fn test_replace_habits_filters_and_keeps_history() {
        let mut user = user(&["h1", "h2"]);
        toggle_habit(&mut user, "h1".into(), true, today());
        toggle_habit(&mut user, "h2".into(), true, today());
        assert_eq!(user.current_streak, 1);

        let stored = replace_habits(
            &mut user,
            vec![
                HabitDefinition::new("h1", "Water"),
                HabitDefinition::new("h3", "  "),
                HabitDefinition::new("h4", "Stretch"),
                HabitDefinition::new("h1", "Duplicate"),
            ],
        );
        let ids: Vec<&str> = stored.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h4"]);

        // Today's cached flag still reflects the old habit list.
        assert!(user.log_for(today()).unwrap().fully_completed);
        assert_eq!(user.current_streak, 1);

        // The next toggle recomputes against the new list.
        let outcome = toggle_habit(&mut user, "h2".into(), false, today());
        assert!(!outcome.fully_completed);
        assert_eq!(outcome.current_streak, 0);
    }

    #[test]
    fn test_removing_unfinished_habit_completes_on_next_toggle() {
        let mut user = user(&["h1", "h2"]);
        toggle_habit(&mut user, "h1".into(), true, today());
        replace_habits(&mut user, vec![HabitDefinition::new("h1", "Water")]);
        assert!(!user.log_for(today()).unwrap().fully_completed);

        let outcome = toggle_habit(&mut user, "h1".into(), true, today());
        assert!(outcome.fully_completed);
        assert_eq!(outcome.current_streak, 1);
    }

    #[test]
    fn test_log_weight_appends_unvalidated() {
        let mut user = user(&["h1"]);
        let at = Utc::now();
        log_weight(&mut user, 82.5, at);
        let weights = log_weight(&mut user, -1.0, at);

        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].value, 82.5);
        assert_eq!(weights[1].value, -1.0);
    }
}

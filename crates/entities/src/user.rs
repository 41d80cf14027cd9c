//! User-related entity definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DailyLogEntry, HabitDefinition, WeightSample, default_habits};

/// Length of the challenge in days.
pub const CHALLENGE_LENGTH_DAYS: u32 = 75;

/// A challenge participant and everything they have logged.
///
/// The whole record is read, modified, and saved as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier.
    pub id: Uuid,
    /// Unique public name shown on the leaderboard.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Consecutive fully completed days, maintained incrementally.
    pub current_streak: u32,
    /// When the user started the challenge.
    pub start_date: DateTime<Utc>,
    /// Current habit template.
    pub habits: Vec<HabitDefinition>,
    /// Ledger of daily entries in append order.
    pub daily_logs: Vec<DailyLogEntry>,
    /// Weight series in append order.
    pub weights: Vec<WeightSample>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a new user starting the challenge now with the default habits.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            current_streak: 0,
            start_date: now,
            habits: default_habits(),
            daily_logs: Vec::new(),
            weights: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the challenge start (and creation) time.
    pub fn started_at(mut self, at: DateTime<Utc>) -> Self {
        self.start_date = at;
        self.created_at = at;
        self.updated_at = at;
        self
    }

    /// Replaces the habit template.
    pub fn with_habits(mut self, habits: Vec<HabitDefinition>) -> Self {
        self.habits = habits;
        self
    }

    /// Returns the ledger entry for a day, if one exists.
    pub fn log_for(&self, date: NaiveDate) -> Option<&DailyLogEntry> {
        self.daily_logs.iter().find(|log| log.date == date)
    }

    /// Returns the 1-based day of the challenge, clamped to its length.
    pub fn challenge_day(&self, today: NaiveDate) -> u32 {
        let elapsed = (today - self.start_date.date_naive()).num_days();
        let day = u32::try_from(elapsed.max(0)).unwrap_or(u32::MAX).saturating_add(1);
        day.min(CHALLENGE_LENGTH_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_user_creation() {
        let user = UserRecord::new("alice", "alice@example.com");

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.current_streak, 0);
        assert_eq!(user.habits.len(), 5);
        assert!(user.daily_logs.is_empty());
        assert!(user.weights.is_empty());
    }

    #[test]
    fn test_challenge_day() {
        let user = UserRecord::new("alice", "alice@example.com").started_at(start());

        assert_eq!(user.challenge_day(date(2024, 1, 1)), 1);
        assert_eq!(user.challenge_day(date(2024, 1, 2)), 2);
        assert_eq!(user.challenge_day(date(2024, 3, 15)), 75);
        assert_eq!(user.challenge_day(date(2025, 1, 1)), 75);
        assert_eq!(user.challenge_day(date(2023, 12, 31)), 1);
    }

    #[test]
    fn test_log_for() {
        let mut user = UserRecord::new("alice", "alice@example.com");
        user.daily_logs.push(DailyLogEntry::new(date(2024, 1, 1)));

        assert!(user.log_for(date(2024, 1, 1)).is_some());
        assert!(user.log_for(date(2024, 1, 2)).is_none());
    }
}

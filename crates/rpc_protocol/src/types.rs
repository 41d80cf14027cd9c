//! Shared wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A habit in the user's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// One day of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub completed_habits: Vec<String>,
    pub fully_completed: bool,
}

/// A weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Everything known about one user, minus credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub current_streak: u32,
    pub challenge_day: u32,
    pub challenge_length: u32,
    pub start_date: DateTime<Utc>,
    pub habits: Vec<Habit>,
    pub daily_logs: Vec<DailyLog>,
    pub weights: Vec<Weight>,
}

/// A leaderboard row.
///
/// The web client links rows by `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub current_streak: u32,
    pub challenge_day: u32,
}

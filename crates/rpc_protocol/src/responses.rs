//! API response types.

use serde::{Deserialize, Serialize};

use crate::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleHabitResponse {
    pub current_streak: u32,
    pub fully_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHabitsResponse {
    pub habits: Vec<Habit>,
}

/// The full weight series after an append.
pub type LogWeightResponse = Vec<Weight>;

/// Users ordered by streak, highest first.
pub type ListUsersResponse = Vec<LeaderboardUser>;

pub type GetUserResponse = UserProfile;

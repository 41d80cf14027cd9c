//! Leaderboard and profile endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use entities::{CHALLENGE_LENGTH_DAYS, UserRecord};
use habit_store::HabitStore;
use rpc_protocol::{
    DailyLog, LeaderboardUser, UserProfile, Weight,
    responses::{GetUserResponse, ListUsersResponse},
};
use streak_engine::{Clock, LeaderboardEntry};
use uuid::Uuid;

use crate::api::habits::to_rpc_habit;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Converts a user record to its public profile.
fn to_profile(user: &UserRecord, today: NaiveDate) -> UserProfile {
    UserProfile {
        id: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        current_streak: user.current_streak,
        challenge_day: user.challenge_day(today),
        challenge_length: CHALLENGE_LENGTH_DAYS,
        start_date: user.start_date,
        habits: user.habits.iter().map(to_rpc_habit).collect(),
        daily_logs: user
            .daily_logs
            .iter()
            .map(|log| DailyLog {
                date: log.date.format("%Y-%m-%d").to_string(),
                completed_habits: log
                    .completed_habits
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
                fully_completed: log.fully_completed,
            })
            .collect(),
        weights: user
            .weights
            .iter()
            .map(|w| Weight {
                date: w.date,
                value: w.value,
            })
            .collect(),
    }
}

fn to_leaderboard_user(entry: LeaderboardEntry) -> LeaderboardUser {
    LeaderboardUser {
        id: entry.id.to_string(),
        username: entry.username,
        current_streak: entry.current_streak,
        challenge_day: entry.challenge_day,
    }
}

/// Lists users by streak after resetting stale streaks.
pub async fn list_users<S: HabitStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ListUsersResponse>> {
    let entries = state.service.list_users_for_leaderboard().await?;

    Ok(Json(entries.into_iter().map(to_leaderboard_user).collect()))
}

/// Gets a user's full profile.
pub async fn get_user<S: HabitStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ServerResult<Json<GetUserResponse>> {
    let user_id: Uuid = id
        .parse()
        .map_err(|_| ServerError::NotFound("User not found".to_string()))?;

    let user = state.service.get_user_profile(user_id).await?;
    let today = state.service.clock().today();

    Ok(Json(to_profile(&user, today)))
}

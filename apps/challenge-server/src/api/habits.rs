//! Habit template and daily check-off endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use entities::{HabitDefinition, HabitId};
use habit_store::HabitStore;
use rpc_protocol::{
    Habit,
    requests::{ToggleHabitRequest, UpdateHabitsRequest},
    responses::{ToggleHabitResponse, UpdateHabitsResponse},
};

use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Converts an entity habit to its wire form.
pub(crate) fn to_rpc_habit(habit: &HabitDefinition) -> Habit {
    Habit {
        id: habit.id.to_string(),
        title: habit.title.clone(),
    }
}

fn to_entity_habit(habit: Habit) -> HabitDefinition {
    HabitDefinition::new(habit.id, habit.title)
}

/// Replaces the caller's habit list.
pub async fn update_habits<S: HabitStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<UpdateHabitsRequest>,
) -> ServerResult<Json<UpdateHabitsResponse>> {
    let habits = request.habits.into_iter().map(to_entity_habit).collect();
    let stored = state.service.replace_habits(user.id, habits).await?;

    Ok(Json(UpdateHabitsResponse {
        habits: stored.iter().map(to_rpc_habit).collect(),
    }))
}

/// Checks or unchecks one of today's habits.
pub async fn toggle_habit<S: HabitStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<ToggleHabitRequest>,
) -> ServerResult<Json<ToggleHabitResponse>> {
    let outcome = state
        .service
        .toggle_habit(user.id, HabitId::new(request.habit_id), request.is_checked)
        .await?;

    Ok(Json(ToggleHabitResponse {
        current_streak: outcome.current_streak,
        fully_completed: outcome.fully_completed,
    }))
}

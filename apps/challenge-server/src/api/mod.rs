//! API endpoints.

pub mod habits;
pub mod register;
pub mod users;
pub mod weight;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use habit_store::HabitStore;

use crate::middleware::auth_middleware;
use crate::state::SharedState;

/// Creates the API router with all endpoints.
///
/// Registration, the leaderboard, and the health check are public; every
/// other route requires a credential.
pub fn create_router<S: HabitStore + 'static>(state: SharedState<S>) -> Router {
    let protected = Router::new()
        .route("/api/user/:id", get(users::get_user))
        .route("/api/update-habits", post(habits::update_habits))
        .route("/api/log", post(habits::toggle_habit))
        .route("/api/weight", post(weight::log_weight))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<S>,
        ));

    Router::new()
        .route("/api/register", post(register::register))
        .route("/api/users", get(users::list_users))
        .route("/health", get(health_check))
        .merge(protected)
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

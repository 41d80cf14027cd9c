//! Application state.

use std::sync::Arc;

use auth::JwtManager;
use habit_store::HabitStore;
use streak_engine::ChallengeService;

/// Shared application state.
pub struct AppState<S: HabitStore> {
    /// Challenge operations over the store.
    pub service: ChallengeService<S>,
    /// Issues and verifies credentials.
    pub jwt_manager: JwtManager,
}

impl<S: HabitStore> AppState<S> {
    /// Creates new application state.
    pub fn new(store: S, jwt_manager: JwtManager) -> Self {
        Self {
            service: ChallengeService::new(store),
            jwt_manager,
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from a store and credential manager.
pub fn create_shared_state<S: HabitStore>(store: S, jwt_manager: JwtManager) -> SharedState<S> {
    Arc::new(AppState::new(store, jwt_manager))
}

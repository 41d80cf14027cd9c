//! Challenge operation error types.

use habit_store::HabitStoreError;
use thiserror::Error;

/// Errors returned by challenge operations.
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// Referenced entity does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Input rejected, e.g. a duplicate username at registration.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Some users could not be saved during a leaderboard sweep.
    #[error("Streak sweep failed for {failed} of {examined} users")]
    SweepIncomplete { failed: usize, examined: usize },

    /// Storage failure.
    #[error("Store error: {0}")]
    Store(#[from] HabitStoreError),
}

impl ChallengeError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Result type for challenge operations.
pub type ChallengeResult<T> = Result<T, ChallengeError>;

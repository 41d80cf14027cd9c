//! Habit store trait definitions.

use async_trait::async_trait;
use entities::UserRecord;
use uuid::Uuid;

use crate::HabitStoreResult;

/// Trait for user record storage.
///
/// Saves replace the whole document. There is no optimistic concurrency
/// check, so two writers of the same user race and the last save wins.
#[async_trait]
pub trait HabitStore: Send + Sync {
    /// Creates a new user. Fails if the id, username, or email is taken.
    async fn create_user(&self, user: UserRecord) -> HabitStoreResult<UserRecord>;

    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> HabitStoreResult<Option<UserRecord>>;

    /// Gets a user by email.
    async fn get_user_by_email(&self, email: &str) -> HabitStoreResult<Option<UserRecord>>;

    /// Gets a user by username.
    async fn get_user_by_username(&self, username: &str)
        -> HabitStoreResult<Option<UserRecord>>;

    /// Lists every user in creation order.
    async fn list_users(&self) -> HabitStoreResult<Vec<UserRecord>>;

    /// Saves an existing user, replacing the stored record.
    async fn update_user(&self, user: UserRecord) -> HabitStoreResult<UserRecord>;
}

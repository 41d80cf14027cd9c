//! In-memory habit store implementation.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::UserRecord;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{HabitStore, HabitStoreError, HabitStoreResult};

#[derive(Debug, Default)]
struct Users {
    records: HashMap<Uuid, UserRecord>,
    order: Vec<Uuid>,
}

/// In-memory habit store.
///
/// Cloning the store shares the underlying records.
#[derive(Debug, Default, Clone)]
pub struct MemoryHabitStore {
    users: Arc<RwLock<Users>>,
}

impl MemoryHabitStore {
    /// Creates a new in-memory habit store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HabitStore for MemoryHabitStore {
    async fn create_user(&self, user: UserRecord) -> HabitStoreResult<UserRecord> {
        let mut users = self.users.write().await;
        if users.records.contains_key(&user.id) {
            return Err(HabitStoreError::already_exists("User", user.id.to_string()));
        }
        if users.records.values().any(|u| u.email == user.email) {
            return Err(HabitStoreError::already_exists("Email", user.email));
        }
        if users.records.values().any(|u| u.username == user.username) {
            return Err(HabitStoreError::already_exists("Username", user.username));
        }
        users.order.push(user.id);
        users.records.insert(user.id, user.clone());
        tracing::debug!(user_id = %user.id, "User stored");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> HabitStoreResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.records.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> HabitStoreResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.records.values().find(|u| u.email == email).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> HabitStoreResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users
            .records
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_users(&self) -> HabitStoreResult<Vec<UserRecord>> {
        let users = self.users.read().await;
        Ok(users
            .order
            .iter()
            .filter_map(|id| users.records.get(id))
            .cloned()
            .collect())
    }

    async fn update_user(&self, user: UserRecord) -> HabitStoreResult<UserRecord> {
        let mut users = self.users.write().await;
        if !users.records.contains_key(&user.id) {
            return Err(HabitStoreError::not_found("User", user.id.to_string()));
        }
        users.records.insert(user.id, user.clone());
        Ok(user)
    }
}

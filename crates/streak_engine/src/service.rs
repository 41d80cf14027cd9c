//! Challenge operations over a habit store.

use entities::{HabitDefinition, HabitId, UserRecord, WeightSample};
use habit_store::{HabitStore, HabitStoreError};
use uuid::Uuid;

use crate::{
    ledger::{self, ToggleOutcome},
    reconcile::{self, CompletionTransition},
    ChallengeError, ChallengeResult, Clock, SystemClock,
};

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// User ID.
    pub id: Uuid,
    /// Public username.
    pub username: String,
    /// Streak after reconciliation.
    pub current_streak: u32,
    /// Day of the challenge the user is on.
    pub challenge_day: u32,
}

impl LeaderboardEntry {
    fn from_user(user: &UserRecord, today: chrono::NaiveDate) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            current_streak: user.current_streak,
            challenge_day: user.challenge_day(today),
        }
    }
}

/// Outcome of a streak sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of users looked at.
    pub examined: usize,
    /// Users whose streak was reset and saved.
    pub reset: Vec<Uuid>,
    /// Users whose reset could not be saved.
    pub failed: Vec<Uuid>,
}

/// Entry point for every challenge operation.
///
/// Each method is one read-modify-write of a single user record. Nothing
/// serializes concurrent calls for the same user; the store's last write
/// wins.
pub struct ChallengeService<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: HabitStore> ChallengeService<S> {
    /// Creates a service backed by the wall clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: HabitStore, C: Clock> ChallengeService<S, C> {
    /// Creates a service with an explicit clock.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    async fn load_user(&self, user_id: Uuid) -> ChallengeResult<UserRecord> {
        self.store
            .get_user(user_id)
            .await?
            .ok_or_else(|| ChallengeError::not_found("User", user_id.to_string()))
    }

    async fn save_user(&self, mut user: UserRecord) -> ChallengeResult<UserRecord> {
        user.updated_at = self.clock.now();
        Ok(self.store.update_user(user).await?)
    }

    /// Registers a new participant with the default habits.
    pub async fn register_user(&self, username: &str, email: &str) -> ChallengeResult<UserRecord> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() {
            return Err(ChallengeError::Validation("Username is required".to_string()));
        }
        if email.is_empty() {
            return Err(ChallengeError::Validation("Email is required".to_string()));
        }
        if self.store.get_user_by_email(email).await?.is_some() {
            return Err(ChallengeError::Validation("Email already exists".to_string()));
        }
        if self.store.get_user_by_username(username).await?.is_some() {
            return Err(ChallengeError::Validation("Username already exists".to_string()));
        }

        let user = UserRecord::new(username, email).started_at(self.clock.now());
        let user = self.store.create_user(user).await.map_err(|e| match e {
            HabitStoreError::AlreadyExists { entity_type, .. } => {
                ChallengeError::Validation(format!("{entity_type} already exists"))
            }
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks or unchecks a habit for today and adjusts the streak.
    pub async fn toggle_habit(
        &self,
        user_id: Uuid,
        habit_id: HabitId,
        checked: bool,
    ) -> ChallengeResult<ToggleOutcome> {
        let mut user = self.load_user(user_id).await?;
        let today = self.clock.today();

        let outcome = ledger::toggle_habit(&mut user, habit_id.clone(), checked, today);
        self.save_user(user).await?;

        match outcome.transition {
            CompletionTransition::Unchanged => tracing::debug!(
                user_id = %user_id,
                habit_id = %habit_id,
                checked,
                "Habit toggled"
            ),
            transition => tracing::info!(
                user_id = %user_id,
                habit_id = %habit_id,
                ?transition,
                streak = outcome.current_streak,
                "Day completion changed"
            ),
        }

        Ok(outcome)
    }

    /// Appends a weight sample and returns the full series.
    pub async fn log_weight(&self, user_id: Uuid, value: f64) -> ChallengeResult<Vec<WeightSample>> {
        let mut user = self.load_user(user_id).await?;
        ledger::log_weight(&mut user, value, self.clock.now());
        let user = self.save_user(user).await?;

        tracing::debug!(user_id = %user_id, samples = user.weights.len(), "Weight logged");
        Ok(user.weights)
    }

    /// Replaces the habit template and returns what was stored.
    pub async fn replace_habits(
        &self,
        user_id: Uuid,
        habits: Vec<HabitDefinition>,
    ) -> ChallengeResult<Vec<HabitDefinition>> {
        let mut user = self.load_user(user_id).await?;
        let submitted = habits.len();
        ledger::replace_habits(&mut user, habits);
        let user = self.save_user(user).await?;

        tracing::info!(
            user_id = %user_id,
            submitted,
            stored = user.habits.len(),
            "Habits replaced"
        );
        Ok(user.habits)
    }

    /// Returns the full user record.
    pub async fn get_user_profile(&self, user_id: Uuid) -> ChallengeResult<UserRecord> {
        self.load_user(user_id).await
    }

    /// Zeroes stale streaks in `users` and saves each reset on its own.
    ///
    /// A failed save does not stop the sweep or undo earlier saves.
    async fn sweep_users(&self, users: &mut [UserRecord]) -> SweepReport {
        let today = self.clock.today();
        let mut report = SweepReport {
            examined: users.len(),
            ..SweepReport::default()
        };

        for user in users.iter_mut() {
            let streak = reconcile::reconcile(user, today);
            if streak == user.current_streak {
                continue;
            }

            let previous = user.current_streak;
            user.current_streak = streak;
            match self.save_user(user.clone()).await {
                Ok(_) => {
                    tracing::info!(user_id = %user.id, previous, "Streak reset");
                    report.reset.push(user.id);
                }
                Err(e) => {
                    tracing::warn!(user_id = %user.id, error = %e, "Failed to save streak reset");
                    report.failed.push(user.id);
                }
            }
        }

        report
    }

    /// Reconciles every user's streak against today.
    pub async fn sweep(&self) -> ChallengeResult<SweepReport> {
        let mut users = self.store.list_users().await?;
        Ok(self.sweep_users(&mut users).await)
    }

    /// Sweeps stale streaks, then returns users ordered by streak.
    ///
    /// Ties keep store order. If any reset could not be saved the call
    /// fails after the other users have been reconciled.
    pub async fn list_users_for_leaderboard(&self) -> ChallengeResult<Vec<LeaderboardEntry>> {
        let mut users = self.store.list_users().await?;
        let report = self.sweep_users(&mut users).await;

        tracing::info!(
            examined = report.examined,
            reset = report.reset.len(),
            failed = report.failed.len(),
            "Streak sweep finished"
        );

        if !report.failed.is_empty() {
            return Err(ChallengeError::SweepIncomplete {
                failed: report.failed.len(),
                examined: report.examined,
            });
        }

        users.sort_by(|a, b| b.current_streak.cmp(&a.current_streak));

        let today = self.clock.today();
        Ok(users
            .iter()
            .map(|user| LeaderboardEntry::from_user(user, today))
            .collect())
    }
}

//! Streak bookkeeping for the 75-day challenge.
//!
//! Two layers cooperate here:
//! - the ledger ([`ledger`]) records which habits were checked on each UTC
//!   day and caches whether the day was fully completed;
//! - reconciliation ([`reconcile`]) moves the streak counter when a day
//!   flips, and zeroes streaks whose last completed day is too old.
//!
//! [`ChallengeService`] wires both to a [`habit_store::HabitStore`] and a
//! [`Clock`].

mod clock;
mod error;
pub mod ledger;
pub mod reconcile;
mod service;

pub use clock::*;
pub use error::*;
pub use service::*;

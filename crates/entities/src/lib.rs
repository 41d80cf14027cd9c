//! Core entity definitions for the 75-day challenge tracker.
//!
//! This crate defines the data types shared across the tracker: users,
//! their habit templates, the per-day completion ledger, and weight samples.

mod daily_log;
mod habit;
mod user;
mod weight;

pub use daily_log::*;
pub use habit::*;
pub use user::*;
pub use weight::*;

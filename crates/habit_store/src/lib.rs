//! User record storage for the challenge tracker.
//!
//! The tracker treats persistence as an external collaborator. This crate
//! defines the contract it needs (find by id or unique field, list, save)
//! and an in-memory implementation used by the server and in tests.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;

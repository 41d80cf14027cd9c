//! Wire types for the challenge tracker's HTTP API.
//!
//! Field names are camelCase to match the existing web client.

mod error;
pub mod requests;
pub mod responses;
mod types;

pub use error::*;
pub use types::*;

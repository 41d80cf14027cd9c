//! JWT credentials for the challenge tracker.
//!
//! This crate provides:
//! - JWT token generation and validation
//! - The identity resolver contract that maps a credential to a user ID

mod error;
mod jwt;
mod resolver;
mod user;

pub use error::*;
pub use jwt::*;
pub use resolver::*;
pub use user::*;

/// Default JWT expiration time in hours.
pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;

/// Default JWT issuer.
pub const DEFAULT_JWT_ISSUER: &str = "seventy-five";

//! Request middleware.

mod auth;

pub use self::auth::*;

//! User types for authentication

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AuthError, Claims};

/// The identity behind a validated credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User ID
    pub id: Uuid,

    /// Username carried by the credential
    pub username: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user
    pub fn new(id: Uuid, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.user_id()?,
            username: claims.username,
        })
    }
}

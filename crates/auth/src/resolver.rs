//! Identity resolution.

use crate::{AuthError, AuthResult, AuthenticatedUser, JwtManager};

/// Maps a presented credential to the user it belongs to.
pub trait IdentityResolver: Send + Sync {
    /// Resolves a raw credential, failing if it is invalid or expired.
    fn resolve(&self, credential: &str) -> AuthResult<AuthenticatedUser>;
}

impl IdentityResolver for JwtManager {
    fn resolve(&self, credential: &str) -> AuthResult<AuthenticatedUser> {
        let claims = self.validate_token(credential).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected credential");
        })?;
        AuthenticatedUser::try_from(claims)
    }
}

/// Picks the credential out of the two header forms clients send.
///
/// `x-auth-token` carries the bare token; `Authorization` must use the
/// `Bearer` scheme. The custom header wins when both are present.
pub fn credential_from_headers<'a>(
    auth_token: Option<&'a str>,
    authorization: Option<&'a str>,
) -> AuthResult<&'a str> {
    auth_token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .or_else(|| {
            authorization
                .and_then(|value| value.strip_prefix("Bearer "))
                .map(str::trim)
                .filter(|token| !token.is_empty())
        })
        .ok_or(AuthError::MissingCredential)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::JwtConfig;

    #[test]
    fn test_resolve_valid_token() {
        let manager = JwtManager::new(JwtConfig::new("resolver-secret-long-enough"));
        let user_id = Uuid::new_v4();
        let token = manager.generate_token(user_id, "alice").unwrap();

        let user = manager.resolve(&token).unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_resolve_garbage() {
        let manager = JwtManager::new(JwtConfig::new("resolver-secret-long-enough"));
        assert!(matches!(
            manager.resolve("garbage"),
            Err(AuthError::InvalidToken | AuthError::JwtValidation(_))
        ));
    }

    #[test]
    fn test_credential_from_headers() {
        assert_eq!(credential_from_headers(Some("abc"), None).unwrap(), "abc");
        assert_eq!(credential_from_headers(None, Some("Bearer xyz")).unwrap(), "xyz");
        assert_eq!(
            credential_from_headers(Some("abc"), Some("Bearer xyz")).unwrap(),
            "abc"
        );
        assert_eq!(
            credential_from_headers(Some("  "), Some("Bearer xyz")).unwrap(),
            "xyz"
        );
    }

    #[test]
    fn test_missing_credential() {
        for (auth_token, authorization) in [
            (None, Some("Basic creds")),
            (Some("  "), None),
            (None, Some("Bearer   ")),
            (None, None),
        ] {
            assert!(matches!(
                credential_from_headers(auth_token, authorization),
                Err(AuthError::MissingCredential)
            ));
        }
    }
}

//! Server error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use habit_store::HabitStoreError;
use rpc_protocol::{error_codes, ErrorResponse};
use streak_engine::ChallengeError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request body could not be read.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected by a challenge operation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Authentication error.
    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ChallengeError> for ServerError {
    fn from(e: ChallengeError) -> Self {
        match &e {
            ChallengeError::NotFound { .. }
            | ChallengeError::Store(HabitStoreError::NotFound { .. }) => {
                ServerError::NotFound(e.to_string())
            }
            ChallengeError::Validation(msg) => ServerError::Validation(msg.clone()),
            ChallengeError::Store(HabitStoreError::AlreadyExists { .. }) => {
                ServerError::Validation(e.to_string())
            }
            ChallengeError::SweepIncomplete { .. } | ChallengeError::Store(_) => {
                ServerError::Internal(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, msg.clone())
            }
            ServerError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, error_codes::RESOURCE_NOT_FOUND, msg.clone())
            }
            ServerError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_FAILED, msg.clone())
            }
            ServerError::Auth(e) => {
                (StatusCode::UNAUTHORIZED, error_codes::AUTHENTICATION_REQUIRED, e.to_string())
            }
            ServerError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR, msg.clone())
            }
        };

        (status, Json(ErrorResponse::new(error_code, message))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_error_mapping() {
        let not_found = ServerError::from(ChallengeError::not_found("User", "42"));
        assert!(matches!(not_found, ServerError::NotFound(_)));

        let store_missing =
            ServerError::from(ChallengeError::Store(HabitStoreError::not_found("User", "42")));
        assert!(matches!(store_missing, ServerError::NotFound(_)));

        let validation = ServerError::from(ChallengeError::Validation("taken".to_string()));
        assert!(matches!(validation, ServerError::Validation(msg) if msg == "taken"));

        let sweep = ServerError::from(ChallengeError::SweepIncomplete {
            failed: 1,
            examined: 2,
        });
        assert!(matches!(sweep, ServerError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::Auth(auth::AuthError::MissingCredential), StatusCode::UNAUTHORIZED),
            (ServerError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::Auth(auth::AuthError::TokenExpired), StatusCode::UNAUTHORIZED),
            (ServerError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}

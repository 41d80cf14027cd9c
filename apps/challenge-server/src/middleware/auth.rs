//! Authentication middleware.

use std::sync::Arc;

use auth::{credential_from_headers, AuthResult, IdentityResolver};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use habit_store::HabitStore;

use crate::error::ServerError;
use crate::state::AppState;

pub use auth::AuthenticatedUser;

/// Header the web client sends its token in.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Extracts the credential from `x-auth-token` or a bearer `Authorization` header.
fn extract_token(request: &Request) -> AuthResult<&str> {
    let headers = request.headers();
    credential_from_headers(
        headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok()),
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok()),
    )
}

/// Authentication middleware.
///
/// Resolves the credential to a user and stores it in the request
/// extensions. Requests without a valid credential are rejected with 401.
pub async fn auth_middleware<S: HabitStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = extract_token(&request).and_then(|token| state.jwt_manager.resolve(token));
    let user = match resolved {
        Ok(user) => user,
        Err(e) => return ServerError::Auth(e).into_response(),
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}

//! Registration endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use habit_store::HabitStore;
use rpc_protocol::{requests::RegisterRequest, responses::RegisterResponse};

use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// Registers a user and hands back a credential for them.
pub async fn register<S: HabitStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ServerResult<Json<RegisterResponse>> {
    let user = state
        .service
        .register_user(&request.username, &request.email)
        .await?;

    let token = state
        .jwt_manager
        .generate_token(user.id, user.username.clone())
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    Ok(Json(RegisterResponse {
        user_id: user.id.to_string(),
        token,
    }))
}

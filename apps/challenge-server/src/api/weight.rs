//! Weight logging endpoint.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use habit_store::HabitStore;
use rpc_protocol::{Weight, requests::LogWeightRequest, responses::LogWeightResponse};

use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Appends a weight sample for the caller.
pub async fn log_weight<S: HabitStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(request): ApiJson<LogWeightRequest>,
) -> ServerResult<Json<LogWeightResponse>> {
    let series = state.service.log_weight(user.id, request.weight).await?;

    Ok(Json(
        series
            .into_iter()
            .map(|sample| Weight {
                date: sample.date,
                value: sample.value,
            })
            .collect(),
    ))
}

//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ServerError;

/// JSON body extractor that reports malformed bodies in the API error format.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);

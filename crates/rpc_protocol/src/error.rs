//! API error payloads.

use serde::{Deserialize, Serialize};

/// Numeric error codes carried in error bodies.
pub mod error_codes {
    /// The request body or parameters were malformed.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Unexpected server-side failure.
    pub const INTERNAL_ERROR: i32 = -32603;
    /// Missing or invalid credential.
    pub const AUTHENTICATION_REQUIRED: i32 = -32001;
    /// The referenced user or habit does not exist.
    pub const RESOURCE_NOT_FOUND: i32 = -32003;
    /// Input rejected, e.g. a duplicate username.
    pub const VALIDATION_FAILED: i32 = -32004;
}

/// Error detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// One of [`error_codes`].
    pub code: i32,
    /// Human readable message.
    pub message: String,
}

/// Body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    /// Creates an error body.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code,
                message: message.into(),
            },
        }
    }
}

//! Mapping from domain errors to HTTP responses.
//!
//! Response bodies are fixed strings. The underlying error is logged here
//! and never serialized.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use baaham_core::error::BaahamError;
use serde_json::json;
use tracing::error;

pub const INVALID_REQUEST: &str = "invalid request";
pub const WRONG_CREDENTIALS: &str = "Wrong credentials";
pub const INTERNAL_ERROR: &str = "internal server error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    BadRequest,
    Unauthorized,
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::BadRequest => INVALID_REQUEST,
            ApiError::Unauthorized => WRONG_CREDENTIALS,
            ApiError::Internal => INTERNAL_ERROR,
        }
    }
}

impl From<BaahamError> for ApiError {
    fn from(err: BaahamError) -> Self {
        match err {
            BaahamError::AuthenticationFailed { .. } => ApiError::Unauthorized,
            BaahamError::Validation { .. } => ApiError::BadRequest,
            other => {
                error!(error = %other, "Request failed with internal error");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

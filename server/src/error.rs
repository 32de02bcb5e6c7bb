//! Mapping of report failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use placeholder_core::ApiError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// No user matches the requested id.
    #[error("user not found")]
    UserNotFound,

    #[error(transparent)]
    Upstream(#[from] ApiError),

    /// The blocking task running the client did not complete.
    #[error("report task failed: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            other => {
                error!(error = %other, "user report request failed");
                (StatusCode::SERVICE_UNAVAILABLE, "Internal server error")
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

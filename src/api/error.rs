use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::storage::json_store::StoreError;

/// Error kinds a request handler can fail with.
///
/// Each variant maps to one HTTP status code; the `Display` string becomes
/// the `detail` field of the JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backing file could not be loaded or saved (500).
    #[error("{0}")]
    Storage(#[from] StoreError),
    /// A create collided with an existing record id (409).
    #[error("student with id {student_id} already exists")]
    Conflict { student_id: i64 },
    /// The id in the request path differs from the id in the body (400).
    #[error("student_id in path ({path_id}) does not match student_id in body ({body_id})")]
    PathBodyMismatch { path_id: i64, body_id: i64 },
    /// No record exists with the given id (404).
    #[error("student with id {student_id} not found")]
    NotFound { student_id: i64 },
    /// A schema constraint was violated (400).
    #[error("{0}")]
    Validation(String),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::PathBodyMismatch { .. } | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!("request failed: {}", detail);
        } else {
            tracing::debug!("request rejected: {}", detail);
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}

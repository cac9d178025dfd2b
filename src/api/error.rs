//! API error types with HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DatabaseError;

/// Errors a request handler can surface to the client.
///
/// Genuine no-match is not an error for most endpoints (they serve an
/// empty array or zero count with 200); only the filename lookup turns
/// no-match into a 404, and that per-endpoint inconsistency is part of
/// the wire contract.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no data found for the provided filename")]
    FilenameNotFound,
    #[error("storage error: {0}")]
    Storage(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::FilenameNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "No data found for the provided filename"})),
            )
                .into_response(),
            ApiError::Storage(err) => {
                // A storage failure is distinguishable from "no rows":
                // log the cause, hide it from the client.
                tracing::error!(%err, "storage failure while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "internal storage error"})),
                )
                    .into_response()
            }
        }
    }
}

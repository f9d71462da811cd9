//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docdiff::DocdiffError;
use serde_json::json;

/// Wrapper turning library errors into JSON error responses.
pub struct ApiError(pub DocdiffError);

impl From<DocdiffError> for ApiError {
    fn from(err: DocdiffError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DocdiffError::UnsupportedFormat { .. } | DocdiffError::ExtractionFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            DocdiffError::DocumentNotFound { .. } => StatusCode::NOT_FOUND,
            DocdiffError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// A plain 400 with an error message, for request-shape problems.
pub fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message })),
    )
        .into_response()
}

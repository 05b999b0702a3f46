use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::StorageError;
use thiserror::Error;
use tracing::error;

/// JSON error envelope: `{"error": <reason phrase>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

/// Client-facing text for storage faults; the underlying error is only logged.
pub const STORAGE_FAILURE_MESSAGE: &str = "the tender store is unavailable";

impl From<StorageError> for JsonApiError {
    fn from(e: StorageError) -> Self {
        error!(err = %e, "storage failure");
        JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            Some(STORAGE_FAILURE_MESSAGE.to_string()),
        )
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

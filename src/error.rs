use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Failure modes of the alert store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything an alert service operation can fail with.
#[derive(Debug, Error)]
pub enum AlertError {
    /// Caller-supplied input broke a required-field or enum constraint.
    /// Recoverable; nothing was persisted.
    #[error("{0}")]
    Validation(String),

    /// The referenced alert id is not in the collection. No state change.
    #[error("Alert not found")]
    NotFound,

    /// The durable write failed; the in-memory mutation was discarded.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, AlertError>;

impl IntoResponse for AlertError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AlertError::Validation(_) => StatusCode::BAD_REQUEST,
            AlertError::NotFound => StatusCode::NOT_FOUND,
            AlertError::Storage(e) => {
                tracing::error!("storage failure: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

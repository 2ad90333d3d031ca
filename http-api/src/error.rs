//! Error handling for the REST surface
//!
//! Maps internal TODO errors to HTTP status codes and JSON error bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::TodoError;

/// REST API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("TODO not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Convert to the HTTP status code sent on the wire
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            // Decode/encode failures are reported as server-side errors
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert from TodoError to ApiError
impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(msg) => ApiError::NotFound(msg),
            TodoError::Validation(msg) => ApiError::Validation(msg),
            TodoError::Serialization(msg) => ApiError::Serialization(msg),
            TodoError::Database(msg) => ApiError::Database(msg),
            TodoError::Configuration(msg) => ApiError::Internal(format!("Configuration error: {msg}")),
            TodoError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store-level failures carry detail that belongs in the server log,
        // not on the wire.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Serialization("bad json".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database("locked".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_todo_error() {
        let err: ApiError = todo_core::TodoError::not_found_id(9).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError = todo_core::TodoError::empty_field("subject").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}

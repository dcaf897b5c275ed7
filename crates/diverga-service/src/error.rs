//! HTTP error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use diverga_assistant::AssistantError;

/// Errors returned by handlers, rendered as `{success: false, error, details?}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Upstream provider failure; `details` carries its response body
    #[error("{message}")]
    Upstream { message: String, details: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::InvalidInput(message) => ApiError::BadRequest(message),
            AssistantError::Upstream { status, body } => ApiError::Upstream {
                message: format!("Upstream API error: HTTP {}", status),
                details: body,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Malformed, mistyped or non-JSON request bodies are client errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = match &self {
            ApiError::Upstream { message, details } => json!({
                "success": false,
                "error": message,
                "details": details,
            }),
            other => json!({
                "success": false,
                "error": other.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let err = ApiError::from(AssistantError::InvalidInput("input must not be empty".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_keeps_body() {
        let err = ApiError::from(AssistantError::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            ApiError::Upstream { message, details } => {
                assert!(message.contains("429"));
                assert_eq!(details, "rate limited");
            }
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = ApiError::from(AssistantError::Request("connection refused".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("connection refused"));
    }
}

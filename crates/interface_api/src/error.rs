//! API error handling
//!
//! The wire format is fixed by the endpoint contract: every error response is
//! `{ "error": <message> }`. Validation failures map to 400; everything that
//! comes out of the dispatch port maps to 500, with a `"server_error"`
//! fallback when the port error carries no usable message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;

/// Fallback message for failures that carry no text of their own
pub const SERVER_ERROR_FALLBACK: &str = "server_error";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Upstream { message, .. } => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
                ApiError::Upstream(message)
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_with_message_is_preserved() {
        let api: ApiError = PortError::upstream_with_message(409, "claim already cancelled").into();
        match api {
            ApiError::Upstream(msg) => assert_eq!(msg, "claim already cancelled"),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn test_messageless_port_error_falls_back() {
        let api: ApiError = PortError::upstream(502).into();
        match api {
            ApiError::Upstream(msg) => assert_eq!(msg, SERVER_ERROR_FALLBACK),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_provider_message_falls_back() {
        let api: ApiError = PortError::upstream_with_message(500, "   ").into();
        match api {
            ApiError::Upstream(msg) => assert_eq!(msg, SERVER_ERROR_FALLBACK),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn test_other_port_errors_use_display_text() {
        let api: ApiError = PortError::connection("connection refused").into();
        match api {
            ApiError::Upstream(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }
}

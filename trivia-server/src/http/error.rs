//! API error types with IntoResponse
//!
//! Clients only ever see two fixed bodies. The reason carried by each
//! variant is logged and never sent.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error type with fixed HTTP status and body
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("resource not found: {reason}")]
    NotFound { reason: String },

    /// Request could not be processed (422)
    #[error("unable to process: {reason}")]
    Unprocessable { reason: String },
}

impl ApiError {
    pub fn not_found(reason: impl fmt::Display) -> Self {
        Self::NotFound {
            reason: reason.to_string(),
        }
    }

    pub fn unprocessable(reason: impl fmt::Display) -> Self {
        Self::Unprocessable {
            reason: reason.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::NotFound { reason } => {
                tracing::debug!(%reason, "responding 404");
                // `error` stays 400 although the status is 404; clients read it as-is
                json!({
                    "success": false,
                    "error": 400,
                    "message": "resource not found"
                })
            }
            Self::Unprocessable { reason } => {
                tracing::warn!(%reason, "responding 422");
                json!({
                    "success": false,
                    "error": 422,
                    "message": "unable process"
                })
            }
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404_with_error_400() {
        let (status, body) = body_of(ApiError::not_found("question 3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "error": 400, "message": "resource not found" })
        );
    }

    #[tokio::test]
    async fn unprocessable_is_422() {
        let (status, body) = body_of(ApiError::unprocessable("missing field")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({ "success": false, "error": 422, "message": "unable process" })
        );
    }

    #[test]
    fn reason_is_kept_for_logs() {
        let err = ApiError::unprocessable("database error: timeout");
        assert_eq!(err.to_string(), "unable to process: database error: timeout");
    }
}

//! # HTTP API Errors
//!
//! Maps store failures onto HTTP responses. Every failure is a JSON
//! `{error, code}` payload:
//!
//! - `InvalidArgument` → 400
//! - `NotFound` → 404
//! - `Read` / `Write` / `Corrupt` → 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// A store error crossing the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::Read { .. } | StoreError::Write { .. } | StoreError::Corrupt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The caller-facing message. Server-side failures are not echoed in
    /// detail; the specifics go to the log instead.
    fn public_message(&self) -> String {
        if self.0.is_client_fault() {
            self.0.to_string()
        } else {
            "An error occurred while processing your request.".to_string()
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.public_message(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

//! Error types shared by the clients, pipelines and HTTP handlers.
//!
//! Every operation returns `Result<_, AppError>`. The handlers never map
//! errors themselves; the `IntoResponse` impl at the bottom of this file is
//! the only place an error becomes an HTTP response.

use std::fmt;

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Which outbound integration produced an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    FormsBackend,
    Model,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::FormsBackend => write!(f, "forms backend"),
            Upstream::Model => write!(f, "model API"),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {}", code),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Uploaded file is not a PDF, JPEG or PNG.
    #[error("Only PDF, JPEG, and PNG files are supported (got '{content_type}')")]
    InvalidMediaType { content_type: String },

    /// The inbound request itself is malformed (bad multipart, missing file).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An uploaded file exceeds the configured body limit.
    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    /// The forms backend or the model API answered with a non-success status,
    /// or could not be reached at all (`status` is `None`).
    #[error("{service} request failed{}: {body}", status_suffix(.status))]
    UpstreamRequestFailed {
        service: Upstream,
        status: Option<u16>,
        body: String,
    },

    /// A reply was received but is not JSON or lacks the expected shape.
    #[error("{service} response unparsable: {detail}")]
    ResponseUnparsable { service: Upstream, detail: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unparsable(service: Upstream, detail: impl Into<String>) -> Self {
        AppError::ResponseUnparsable {
            service,
            detail: detail.into(),
        }
    }

    pub fn transport(service: Upstream, err: reqwest::Error) -> Self {
        AppError::UpstreamRequestFailed {
            service,
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }

    /// Stable machine-readable code returned next to the free-text detail.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidMediaType { .. } => "invalid_media_type",
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::UpstreamRequestFailed { .. } => "upstream_request_failed",
            AppError::ResponseUnparsable { .. } => "response_unparsable",
            AppError::Internal(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidMediaType { .. } | AppError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UpstreamRequestFailed { .. }
            | AppError::ResponseUnparsable { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            error!("Request failed ({}): {}", self.code(), detail);
        } else {
            warn!("Request rejected ({}): {}", self.code(), detail);
        }

        let body = json!({
            "detail": detail,
            "code": self.code(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::InvalidRequest(format!("Multipart error: {}", e))
        }
    }
}

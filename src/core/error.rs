use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_FIELD_MESSAGE: &str = "destination, startDate, and endDate are required";
pub const UPSTREAM_ERROR_MESSAGE: &str = "OpenAI API error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("destination, startDate, and endDate are required")]
    MissingField { missing: Vec<&'static str> },
    #[error("OpenAI API error: {0}")]
    Upstream(#[from] UpstreamFailure),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Every way the live path can fail. Callers see one response shape; the
/// variant only feeds logging.
#[derive(Debug, Error)]
pub enum UpstreamFailure {
    #[error("request to completion API failed: {0}")]
    Transport(String),
    #[error("completion API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid completion response: {0}")]
    Envelope(String),
    #[error("completion content is not valid JSON: {0}")]
    Completion(String),
}

impl UpstreamFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Envelope(_) => "envelope",
            Self::Completion(_) => "completion",
        }
    }
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn missing_field(missing: Vec<&'static str>) -> Self {
        Self::MissingField { missing }
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::MissingField { .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: MISSING_FIELD_MESSAGE.to_string(),
                    details: None,
                },
            ),
            Self::Upstream(failure) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: UPSTREAM_ERROR_MESSAGE.to_string(),
                    details: Some(failure.to_string()),
                },
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: other.to_string(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::interface::ErrorResponse;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: text, source_lang, or target_lang";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const TIMEOUT_MESSAGE: &str = "Translation API timed out";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("translation API did not answer in time")]
    Timeout,
    #[error("failed to reach translation API: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum RelayError {
    /// First required field that was absent, not a string, or empty
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("translation API returned {status} {status_text}")]
    Upstream {
        status: u16,
        status_text: String,
        details: Option<serde_json::Value>,
    },
    #[error("translation API timed out")]
    Timeout,
    #[error("malformed request body: {0}")]
    MalformedRequest(serde_json::Error),
    #[error("malformed translation API response: {0}")]
    MalformedUpstream(String),
    #[error(transparent)]
    Transport(reqwest::Error),
}

impl From<UpstreamError> for RelayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Timeout => RelayError::Timeout,
            UpstreamError::Transport(e) => RelayError::Transport(e),
        }
    }
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingField(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        match self {
            RelayError::MissingField(_) => ErrorResponse::new(MISSING_FIELDS_MESSAGE),
            RelayError::Upstream { status_text, details, .. } => ErrorResponse {
                error: format!("Translation API error: {}", status_text),
                // Always present for upstream failures, `null` when unparsable
                details: Some(details.clone().unwrap_or(serde_json::Value::Null)),
            },
            RelayError::Timeout => ErrorResponse::new(TIMEOUT_MESSAGE),
            _ => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Translation error: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

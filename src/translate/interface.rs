//! Translate interface - actual translation happens in the upstream API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::UpstreamError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Raw reply of the upstream API, before the relay interprets it
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty when there is none
    pub status_text: String,
    /// `None` when the body could not be read
    pub body: Option<Vec<u8>>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the relay and the external translation service
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Send one translation request upstream. Non-2xx replies are returned
    /// as `Ok`; only transport failures are errors.
    async fn forward(&self, request: &TranslationRequest) -> Result<UpstreamResponse, UpstreamError>;
}

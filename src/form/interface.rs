use async_trait::async_trait;
use thiserror::Error;

use crate::translate::{TranslationRequest, TranslationResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    /// Relay answered with a non-2xx status
    #[error("Translation failed: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// What the form calls to get a translation
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse, ClientError>;
}

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::interface::{ClientError, TranslationService};
use crate::translate::{TranslationRequest, TranslationResponse};

/// Calls the local relay; the relay is the only thing that talks to the
/// external translation API.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

#[async_trait]
impl TranslationService for RelayClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse, ClientError> {
        let url = self.translate_url();
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let result: TranslationResponse = response.json().await?;
        Ok(result)
    }
}

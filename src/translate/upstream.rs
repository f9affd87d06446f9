use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::UpstreamError;
use super::interface::{TranslationApi, TranslationRequest, UpstreamResponse};
use crate::config::UpstreamConfig;

/// Client for the external translation HTTP API
#[derive(Debug, Clone)]
pub struct HttpTranslationApi {
    client: Client,
    endpoint: String,
}

impl HttpTranslationApi {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationApi for HttpTranslationApi {
    async fn forward(&self, request: &TranslationRequest) -> Result<UpstreamResponse, UpstreamError> {
        debug!(
            "Forwarding translation {} -> {} ({} chars) to {}",
            request.source_lang,
            request.target_lang,
            request.text.chars().count(),
            self.endpoint
        );

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) if e.is_timeout() => return Err(UpstreamError::Timeout),
            Err(e) => {
                debug!("Failed to read translation API body: {}", e);
                None
            }
        };

        Ok(UpstreamResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(err)
    }
}

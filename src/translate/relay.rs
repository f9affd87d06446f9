use serde_json::Value;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error::RelayError;
use super::interface::{TranslationApi, UpstreamResponse};
use super::validation::validate;

/// Relay one inbound request body to the translation API.
///
/// On success the upstream JSON is returned untouched. Every failure is a
/// [`RelayError`] carrying the status and body the caller should see.
pub async fn relay(api: &dyn TranslationApi, raw_body: &[u8]) -> Result<Value, RelayError> {
    let request_id = Uuid::new_v4();
    relay_inner(api, raw_body)
        .instrument(info_span!("relay", %request_id))
        .await
}

async fn relay_inner(api: &dyn TranslationApi, raw_body: &[u8]) -> Result<Value, RelayError> {
    let body: Value = serde_json::from_slice(raw_body).map_err(RelayError::MalformedRequest)?;

    let request = validate(&body).map_err(|e| {
        warn!("Rejected translation request: {}", e);
        e
    })?;

    let response = api.forward(&request).await?;
    info!("Translation API answered {}", response.status);

    interpret(response)
}

fn interpret(response: UpstreamResponse) -> Result<Value, RelayError> {
    if !response.is_success() {
        // Best effort: an unreadable or non-JSON error body becomes `null`
        let details = response
            .body
            .as_deref()
            .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());

        return Err(RelayError::Upstream {
            status: response.status,
            status_text: response.status_text,
            details,
        });
    }

    let bytes = response
        .body
        .ok_or_else(|| RelayError::MalformedUpstream("body could not be read".to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| RelayError::MalformedUpstream(e.to_string()))
}

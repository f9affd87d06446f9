use serde_json::Value;

use super::error::RelayError;
use super::interface::TranslationRequest;

type FieldCheck = (&'static str, fn(Option<&Value>) -> bool);

fn non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// Checked in order; the first failure is reported.
const REQUIRED_FIELDS: [FieldCheck; 3] = [
    ("text", non_empty_string),
    ("source_lang", non_empty_string),
    ("target_lang", non_empty_string),
];

/// Check the inbound body before any I/O happens.
///
/// The relay does not trim text and does not check language codes; the
/// upstream API is the authority on both.
pub fn validate(body: &Value) -> Result<TranslationRequest, RelayError> {
    for (field, is_valid) in REQUIRED_FIELDS {
        if !is_valid(body.get(field)) {
            return Err(RelayError::MissingField(field));
        }
    }

    let field = |name: &str| {
        body.get(name)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    Ok(TranslationRequest {
        text: field("text"),
        source_lang: field("source_lang"),
        target_lang: field("target_lang"),
    })
}

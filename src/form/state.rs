use tracing::debug;

use super::interface::{ClientError, TranslationService};
use crate::languages::SupportedLanguage;
use crate::translate::{TranslationRequest, TranslationResponse};

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter text to translate";
pub const SAME_LANGUAGE_MESSAGE: &str = "Source and target languages must be different";
pub const FALLBACK_ERROR_MESSAGE: &str = "Translation failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    InFlight,
    Succeeded(String),
    Failed(String),
}

/// What the result area currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display<'a> {
    Nothing,
    Translation(&'a str),
    Error(&'a str),
}

/// State behind the translator form. One submit at a time; there is no way
/// to abandon a request once it is in flight.
#[derive(Debug, Clone)]
pub struct TranslatorForm {
    text: String,
    source: SupportedLanguage,
    target: SupportedLanguage,
    translated_text: String,
    error: Option<String>,
    phase: Phase,
}

impl Default for TranslatorForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            source: SupportedLanguage::Spanish,
            target: SupportedLanguage::English,
            translated_text: String::new(),
            error: None,
            phase: Phase::Idle,
        }
    }
}

impl TranslatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    // Field edits never clear a result or error already on screen.

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_source(&mut self, lang: SupportedLanguage) {
        self.source = lang;
    }

    pub fn set_target(&mut self, lang: SupportedLanguage) {
        self.target = lang;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> SupportedLanguage {
        self.source
    }

    pub fn target(&self) -> SupportedLanguage {
        self.target
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InFlight
    }

    /// Whether the translate button is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.text.trim().is_empty()
    }

    pub fn view(&self) -> Display<'_> {
        match &self.error {
            Some(err) => Display::Error(err),
            None if !self.translated_text.is_empty() => Display::Translation(&self.translated_text),
            None => Display::Nothing,
        }
    }

    /// Run local checks and move to `InFlight`. Returns the request to send,
    /// or `None` when the submit ended without a network call.
    pub fn begin_submit(&mut self) -> Option<TranslationRequest> {
        if self.is_loading() {
            return None;
        }

        self.phase = Phase::Validating;

        if self.text.trim().is_empty() {
            self.fail(EMPTY_TEXT_MESSAGE.to_string());
            return None;
        }
        if self.source == self.target {
            self.fail(SAME_LANGUAGE_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        self.phase = Phase::InFlight;

        Some(TranslationRequest {
            text: self.text.clone(),
            source_lang: self.source.code().to_string(),
            target_lang: self.target.code().to_string(),
        })
    }

    /// Resolve the in-flight request into a terminal state
    pub fn finish(&mut self, result: Result<TranslationResponse, ClientError>) {
        match result {
            Ok(response) => {
                self.error = None;
                self.translated_text = response.translated_text.clone();
                self.phase = Phase::Succeeded(response.translated_text);
            }
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    self.fail(FALLBACK_ERROR_MESSAGE.to_string());
                } else {
                    self.fail(message);
                }
            }
        }
    }

    pub async fn submit(&mut self, service: &dyn TranslationService) -> &Phase {
        let Some(request) = self.begin_submit() else {
            return &self.phase;
        };

        let result = service.translate(&request).await;
        self.finish(result);
        &self.phase
    }

    fn fail(&mut self, message: String) {
        debug!("Translation form failed: {}", message);
        self.error = Some(message.clone());
        self.phase = Phase::Failed(message);
    }
}

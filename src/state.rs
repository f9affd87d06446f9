use std::sync::Arc;

use crate::config::Config;
use crate::translate::{HttpTranslationApi, TranslationApi};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translation_api: Arc<dyn TranslationApi>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translation_api = Arc::new(HttpTranslationApi::new(&config.upstream)?);
        Ok(Self::with_api(config, translation_api))
    }

    /// Build state around any upstream implementation
    pub fn with_api(config: Config, translation_api: Arc<dyn TranslationApi>) -> Self {
        Self {
            config,
            translation_api,
        }
    }
}

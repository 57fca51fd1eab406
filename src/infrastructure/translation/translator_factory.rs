use std::sync::Arc;

use crate::application::ports::{TranslationError, Translator};
use crate::presentation::config::{TranslationProviderSetting, TranslationSettings};

use super::google_translator::GoogleTranslator;
use super::mock_translator::MockTranslator;
use super::openai_translator::OpenAiTranslator;

pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create(settings: &TranslationSettings) -> Result<Arc<dyn Translator>, TranslationError> {
        match settings.provider {
            TranslationProviderSetting::Google => {
                let key = settings
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
                    .ok_or_else(|| {
                        TranslationError::Configuration(
                            "API key required for Google Translate".to_string(),
                        )
                    })?;
                Ok(Arc::new(GoogleTranslator::new(key, settings.base_url.clone())))
            }
            TranslationProviderSetting::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .ok_or_else(|| {
                        TranslationError::Configuration(
                            "API key required for OpenAI translation".to_string(),
                        )
                    })?;
                Ok(Arc::new(OpenAiTranslator::new(
                    key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                )))
            }
            TranslationProviderSetting::Mock => Ok(Arc::new(MockTranslator)),
        }
    }
}

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

/// Reports every text as English and tags it with the target language.
pub struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslationError> {
        LanguageCode::parse("en").map_err(|e| TranslationError::DetectionFailed(e.to_string()))
    }

    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        Ok(format!("[{}] {}", target, text))
    }
}

use async_trait::async_trait;

use crate::domain::LanguageCode;

/// Detects the language of a text and translates it.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslationError>;

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("language detection failed: {0}")]
    DetectionFailed(String),
    #[error("translation api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid translation response: {0}")]
    InvalidResponse(String),
    #[error("translator configuration invalid: {0}")]
    Configuration(String),
}

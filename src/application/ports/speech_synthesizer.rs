use async_trait::async_trait;

use crate::domain::{LanguageCode, SynthesizedAudio};

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<SynthesizedAudio, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("speech api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid speech response: {0}")]
    InvalidResponse(String),
    #[error("language not supported for speech: {0}")]
    UnsupportedLanguage(String),
    #[error("synthesizer configuration invalid: {0}")]
    Configuration(String),
}

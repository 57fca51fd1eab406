use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::presentation::config::{SynthesisProviderSetting, SynthesisSettings};

use super::google_speech_synthesizer::GoogleSpeechSynthesizer;
use super::mock_speech_synthesizer::MockSpeechSynthesizer;
use super::openai_speech_synthesizer::OpenAiSpeechSynthesizer;

pub struct SpeechSynthesizerFactory;

impl SpeechSynthesizerFactory {
    pub fn create(
        settings: &SynthesisSettings,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SynthesisError> {
        match settings.provider {
            SynthesisProviderSetting::Google => {
                let key = settings
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
                    .ok_or_else(|| {
                        SynthesisError::Configuration(
                            "API key required for Google Text-to-Speech".to_string(),
                        )
                    })?;
                Ok(Arc::new(GoogleSpeechSynthesizer::new(
                    key,
                    settings.base_url.clone(),
                )))
            }
            SynthesisProviderSetting::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .ok_or_else(|| {
                        SynthesisError::Configuration(
                            "API key required for OpenAI speech".to_string(),
                        )
                    })?;
                let synthesizer = OpenAiSpeechSynthesizer::new(
                    key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                    settings.voice.clone(),
                )?;
                Ok(Arc::new(synthesizer))
            }
            SynthesisProviderSetting::Mock => Ok(Arc::new(MockSpeechSynthesizer)),
        }
    }
}

use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match settings.provider {
            TranscriptionProviderSetting::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .ok_or_else(|| {
                        TranscriptionError::Configuration(
                            "API key required for OpenAI Whisper".to_string(),
                        )
                    })?;
                let engine = OpenAiWhisperEngine::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                );
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration("base_url required for Azure".into())
                })?;
                let deployment = settings.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration("azure_deployment required".into())
                })?;
                let key = settings.api_key.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration("api_key required for Azure".into())
                })?;
                let engine =
                    AzureWhisperEngine::new(base_url, deployment, key, &settings.azure_api_version);
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Mock => Ok(Arc::new(MockTranscriptionEngine::default())),
        }
    }
}

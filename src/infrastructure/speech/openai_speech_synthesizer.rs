use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::{AudioFormat, LanguageCode, SynthesizedAudio};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI `audio/speech`. The voices are multilingual and follow the language
/// of the input text, so the language code is only logged.
pub struct OpenAiSpeechSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        voice: String,
    ) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SynthesisError::Configuration(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
            voice,
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        let endpoint = format!("{}/audio/speech", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
            "voice": self.voice,
            "response_format": AudioFormat::Mp3.extension(),
        });

        tracing::debug!(model = %self.model, language = %language, "Requesting OpenAI speech synthesis");

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        if !status.is_success() {
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status,
                String::from_utf8_lossy(&bytes)
            )));
        }

        tracing::info!(bytes = bytes.len(), "OpenAI speech synthesis completed");

        Ok(SynthesizedAudio {
            data: bytes,
            format: AudioFormat::Mp3,
        })
    }
}

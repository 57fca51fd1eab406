use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::{AudioFormat, LanguageCode, SynthesizedAudio};

pub const GOOGLE_TTS_DEFAULT_BASE_URL: &str = "https://texttospeech.googleapis.com";

/// Google Cloud Text-to-Speech (`text:synthesize`), MP3 output.
pub struct GoogleSpeechSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl ApiError {
    /// `INVALID_ARGUMENT` naming the language means no voice exists for it.
    fn is_unsupported_language(&self) -> bool {
        self.status == "INVALID_ARGUMENT" && self.message.to_lowercase().contains("language")
    }
}

impl GoogleSpeechSynthesizer {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| GOOGLE_TTS_DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        let url = format!("{}/v1/text:synthesize", self.base_url);
        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: language.as_str(),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

        tracing::debug!(language = %language, chars = text.len(), "Requesting Google speech synthesis");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let unsupported = serde_json::from_str::<ErrorEnvelope>(&body)
                .is_ok_and(|envelope| envelope.error.is_unsupported_language());
            if status == reqwest::StatusCode::BAD_REQUEST && unsupported {
                return Err(SynthesisError::UnsupportedLanguage(language.to_string()));
            }
            return Err(SynthesisError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        let data = STANDARD
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| SynthesisError::InvalidResponse(format!("audio content: {}", e)))?;

        tracing::info!(bytes = data.len(), "Google speech synthesis completed");

        Ok(SynthesizedAudio {
            data: Bytes::from(data),
            format: AudioFormat::Mp3,
        })
    }
}

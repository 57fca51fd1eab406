use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DETECT_INSTRUCTIONS: &str = "Identify the language of the user's text. \
Reply with only its ISO 639-1 code in lowercase, nothing else.";

/// Translation and language detection through an OpenAI-compatible chat
/// completions endpoint.
pub struct OpenAiTranslator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiTranslator {
    pub fn new(api_key: String, base_url: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
        }
    }

    async fn complete(&self, instructions: &str, text: &str) -> Result<String, TranslationError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| TranslationError::InvalidResponse("empty completion".to_string()))
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslationError> {
        let answer = self.complete(DETECT_INSTRUCTIONS, text).await?;
        let code = answer.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-');

        LanguageCode::parse(code).map_err(|e| TranslationError::DetectionFailed(e.to_string()))
    }

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let instructions = format!(
            "Translate the user's text from language '{}' to language '{}'. \
Reply with only the translation.",
            source, target
        );

        let translated = self.complete(&instructions, text).await?;

        tracing::info!(
            source = %source,
            target = %target,
            model = %self.model,
            chars = translated.len(),
            "OpenAI translation completed"
        );

        Ok(translated)
    }
}

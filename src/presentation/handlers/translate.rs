use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::domain::{AudioFormat, LanguageCode, TranslationRequest};
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub const AUDIO_FIELD: &str = "audio";
pub const TARGET_LANGUAGE_FIELD: &str = "target_lang";
pub const NO_AUDIO_MESSAGE: &str = "No audio file provided";

#[derive(Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub recognized_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub audio_url: String,
}

struct AudioUpload {
    data: Bytes,
    format: AudioFormat,
}

#[derive(Default)]
struct TranslateForm {
    audio: Option<AudioUpload>,
    target_lang: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn translate_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        tracing::warn!("Translate request without a multipart body");
        return error_response(StatusCode::BAD_REQUEST, NO_AUDIO_MESSAGE);
    };

    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart");
            return error_response(e.status(), format!("Invalid multipart body: {}", e.body_text()));
        }
    };

    let Some(audio) = form.audio else {
        tracing::warn!("Translate request with no audio");
        return error_response(StatusCode::BAD_REQUEST, NO_AUDIO_MESSAGE);
    };

    let target_language = match form.target_lang {
        None => state.default_target_language.clone(),
        Some(raw) => match LanguageCode::parse(&raw) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(target_lang = %raw, "Rejected target language");
                return error_response(StatusCode::BAD_REQUEST, e.to_string());
            }
        },
    };

    tracing::debug!(
        bytes = audio.data.len(),
        format = %audio.format,
        target_language = %target_language,
        "Audio upload received"
    );

    let request = TranslationRequest::new(audio.data, audio.format, target_language);

    match state.translation_pipeline.run(request).await {
        Ok(outcome) => {
            tracing::info!(
                recognized = %sanitize_text(&outcome.recognized_text),
                source_language = %outcome.source_language,
                target_language = %outcome.target_language,
                "Translation successful"
            );

            (
                StatusCode::OK,
                Json(TranslateResponse {
                    success: true,
                    audio_url: format!("/audio/{}", outcome.audio_file),
                    recognized_text: outcome.recognized_text,
                    translated_text: outcome.translated_text,
                    source_language: outcome.source_language.to_string(),
                    target_language: outcome.target_language.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, "Translation rejected");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Translation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<TranslateForm, MultipartError> {
    let mut form = TranslateForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            // only file parts count; the first non-empty one wins
            Some(AUDIO_FIELD) if form.audio.is_none() && field.file_name().is_some() => {
                let format = AudioFormat::detect(field.file_name(), field.content_type());
                let data = field.bytes().await?;
                if !data.is_empty() {
                    form.audio = Some(AudioUpload { data, format });
                }
            }
            Some(TARGET_LANGUAGE_FIELD) => {
                let value = field.text().await?;
                let value = value.trim();
                form.target_lang = (!value.is_empty()).then(|| value.to_string());
            }
            _ => {}
        }
    }

    Ok(form)
}

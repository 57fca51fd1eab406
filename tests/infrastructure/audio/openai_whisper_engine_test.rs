use axum::Router;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;

use babelvox::application::ports::{TranscriptionEngine, TranscriptionError};
use babelvox::domain::AudioFormat;
use babelvox::infrastructure::audio::OpenAiWhisperEngine;

use crate::helpers::start_mock_server;

/// Answers with the model and file name it received, or 401 without a key.
async fn transcriptions(headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer test-key") {
        return (StatusCode::UNAUTHORIZED, "missing key".to_string());
    }

    let mut model = String::new();
    let mut file_name = String::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("model") => model = field.text().await.unwrap(),
            Some("file") => file_name = field.file_name().unwrap_or_default().to_string(),
            _ => {}
        }
    }

    (StatusCode::OK, format!("  {} heard {}\n", model, file_name))
}

#[tokio::test]
async fn given_valid_key_when_transcribing_then_sends_model_and_format() {
    let app = Router::new().route("/v1/audio/transcriptions", post(transcriptions));
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(format!("{}/v1/", base_url)),
        Some("whisper-1".to_string()),
    );

    let result = engine.transcribe(b"clip", AudioFormat::Webm).await;

    assert_eq!(result.unwrap(), "whisper-1 heard audio.webm");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rejected_key_when_transcribing_then_returns_api_error() {
    let app = Router::new().route("/v1/audio/transcriptions", post(transcriptions));
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let engine = OpenAiWhisperEngine::new(
        "wrong-key".to_string(),
        Some(format!("{}/v1", base_url)),
        None,
    );

    let result = engine.transcribe(b"clip", AudioFormat::Wav).await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(message)) => {
            assert!(message.contains("401"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use std::collections::HashMap;

use babelvox::application::ports::{TranslationError, Translator};
use babelvox::domain::LanguageCode;
use babelvox::infrastructure::translation::GoogleTranslator;

use crate::helpers::start_mock_server;

async fn detect(Json(body): Json<Value>) -> impl IntoResponse {
    let language = match body["q"].as_str() {
        Some("Hola") => "es",
        Some("???") => "und",
        _ => "en",
    };
    Json(json!({
        "data": { "detections": [[{ "language": language, "confidence": 0.98 }]] }
    }))
}

async fn translate(
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if params.get("key").map(String::as_str) != Some("test-key") {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "bad key"})));
    }
    let text = format!(
        "{}->{}: {}",
        body["source"].as_str().unwrap_or_default(),
        body["target"].as_str().unwrap_or_default(),
        body["q"].as_str().unwrap_or_default()
    );
    (
        StatusCode::OK,
        Json(json!({ "data": { "translations": [{ "translatedText": text }] } })),
    )
}

fn google_router() -> Router {
    Router::new()
        .route("/language/translate/v2/detect", post(detect))
        .route("/language/translate/v2", post(translate))
}

#[tokio::test]
async fn given_spanish_text_when_detecting_then_returns_es() {
    let (base_url, shutdown_tx) = start_mock_server(google_router()).await;
    let translator = GoogleTranslator::new("test-key".to_string(), Some(base_url));

    let language = translator.detect_language("Hola").await.unwrap();

    assert_eq!(language.as_str(), "es");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_undetermined_language_when_detecting_then_returns_detection_failed() {
    let (base_url, shutdown_tx) = start_mock_server(google_router()).await;
    let translator = GoogleTranslator::new("test-key".to_string(), Some(base_url));

    let result = translator.detect_language("???").await;

    assert!(matches!(result, Err(TranslationError::DetectionFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_source_and_target_when_translating_then_sends_both_codes() {
    let (base_url, shutdown_tx) = start_mock_server(google_router()).await;
    let translator = GoogleTranslator::new("test-key".to_string(), Some(base_url));

    let translated = translator
        .translate(
            "Good morning",
            &LanguageCode::parse("en").unwrap(),
            &LanguageCode::parse("de").unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(translated, "en->de: Good morning");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_wrong_key_when_translating_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(google_router()).await;
    let translator = GoogleTranslator::new("wrong-key".to_string(), Some(base_url));

    let result = translator
        .translate(
            "Good morning",
            &LanguageCode::parse("en").unwrap(),
            &LanguageCode::parse("de").unwrap(),
        )
        .await;

    assert!(matches!(result, Err(TranslationError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_quota_exhausted_when_detecting_then_returns_rate_limited() {
    let app = Router::new().route(
        "/language/translate/v2/detect",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota").into_response() }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let translator = GoogleTranslator::new("test-key".to_string(), Some(base_url));

    let result = translator.detect_language("Hola").await;

    assert!(matches!(result, Err(TranslationError::RateLimited)));
    shutdown_tx.send(()).ok();
}

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::Router;
use bytes::Bytes;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use babelvox::application::ports::{
    ScratchStore, SpeechSynthesizer, SynthesisError, TranscriptionEngine, TranscriptionError,
    TranslationError, Translator,
};
use babelvox::application::services::TranslationPipeline;
use babelvox::domain::{AudioFormat, LanguageCode, SynthesizedAudio};
use babelvox::infrastructure::storage::LocalScratchStore;
use babelvox::presentation::{AppState, create_router};

pub const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;
pub const TEST_BOUNDARY: &str = "babelvox-test-boundary";
pub const FAKE_MP3: &[u8] = b"ID3\x04\x00fake-mp3-frames";

/// Returns the same transcript for every clip and remembers the clips it saw.
pub struct ScriptedTranscriptionEngine {
    transcript: String,
    pub seen_formats: Mutex<Vec<AudioFormat>>,
}

impl ScriptedTranscriptionEngine {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            seen_formats: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for ScriptedTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        self.seen_formats.lock().unwrap().push(format);
        Ok(self.transcript.clone())
    }
}

pub struct FailingTranscriptionEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for FailingTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::TranscriptionFailed(
            "model exploded".to_string(),
        ))
    }
}

/// Detects English and knows a few Spanish and French phrases.
pub struct PhrasebookTranslator {
    pub calls: Mutex<usize>,
}

impl PhrasebookTranslator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Translator for PhrasebookTranslator {
    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslationError> {
        Ok(LanguageCode::parse("en").unwrap())
    }

    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        *self.calls.lock().unwrap() += 1;
        let translated = match (text, target.as_str()) {
            ("Good morning", "es") => "Buenos días",
            ("Good morning", "fr") => "Bonjour",
            ("Where is the library?", "es") => "¿Dónde está la biblioteca?",
            _ => return Ok(format!("[{}] {}", target, text)),
        };
        Ok(translated.to_string())
    }
}

pub struct FailingTranslator;

#[async_trait::async_trait]
impl Translator for FailingTranslator {
    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslationError> {
        Err(TranslationError::ApiRequestFailed(
            "translation service unreachable".to_string(),
        ))
    }

    async fn translate(
        &self,
        _text: &str,
        _source: &LanguageCode,
        _target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        unreachable!("detection fails first")
    }
}

pub struct FakeSpeechSynthesizer {
    pub calls: Mutex<usize>,
}

impl FakeSpeechSynthesizer {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(0),
        }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for FakeSpeechSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language: &LanguageCode,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        *self.calls.lock().unwrap() += 1;
        Ok(SynthesizedAudio {
            data: Bytes::from_static(FAKE_MP3),
            format: AudioFormat::Mp3,
        })
    }
}

pub struct FailingSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for FailingSpeechSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        language: &LanguageCode,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        Err(SynthesisError::UnsupportedLanguage(language.to_string()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub scratch_dir: tempfile::TempDir,
    pub static_dir: tempfile::TempDir,
}

impl TestApp {
    pub fn scratch_files(&self) -> HashSet<String> {
        list_files(self.scratch_dir.path())
    }
}

pub fn create_pipeline(
    scratch_dir: &Path,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    translator: Arc<dyn Translator>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
) -> TranslationPipeline {
    let scratch_store: Arc<dyn ScratchStore> =
        Arc::new(LocalScratchStore::new(scratch_dir.to_path_buf()).unwrap());
    TranslationPipeline::new(
        transcription_engine,
        translator,
        speech_synthesizer,
        scratch_store,
    )
}

pub fn create_test_app_with(
    transcription_engine: Arc<dyn TranscriptionEngine>,
    translator: Arc<dyn Translator>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
) -> TestApp {
    let scratch_dir = tempfile::TempDir::new().unwrap();
    let static_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html><body>babelvox</body></html>",
    )
    .unwrap();

    let pipeline = create_pipeline(
        scratch_dir.path(),
        transcription_engine,
        translator,
        speech_synthesizer,
    );
    let state = AppState::new(Arc::new(pipeline), LanguageCode::default());
    let router = create_router(state, static_dir.path(), TEST_MAX_UPLOAD_BYTES);

    TestApp {
        router,
        scratch_dir,
        static_dir,
    }
}

pub fn create_test_app(transcript: &str) -> TestApp {
    create_test_app_with(
        Arc::new(ScriptedTranscriptionEngine::new(transcript)),
        Arc::new(PhrasebookTranslator::new()),
        Arc::new(FakeSpeechSynthesizer::new()),
    )
}

pub fn list_files(dir: &Path) -> HashSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect()
}

pub enum FormPart<'a> {
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        match part {
            FormPart::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            FormPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", TEST_BOUNDARY)
}

/// Serves `app` on an ephemeral port until the sender is used or dropped.
pub async fn start_mock_server(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

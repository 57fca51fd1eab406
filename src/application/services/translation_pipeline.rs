use std::io;
use std::sync::Arc;

use futures::StreamExt;
use futures::stream;

use crate::application::ports::{
    ScratchStore, ScratchStoreError, SpeechSynthesizer, SynthesisError, TranscriptionEngine,
    TranscriptionError, TranslationError, Translator,
};
use crate::domain::{
    AudioFormat, LanguageCode, ScratchFileName, TranscriptionResult, TranslationOutcome,
    TranslationRequest, TranslationResult,
};

use super::scratch_guard::ScratchGuard;

/// Upload → transcribe → translate → synthesize for a single request.
pub struct TranslationPipeline {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    translator: Arc<dyn Translator>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    scratch_store: Arc<dyn ScratchStore>,
}

impl TranslationPipeline {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        translator: Arc<dyn Translator>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
        scratch_store: Arc<dyn ScratchStore>,
    ) -> Self {
        Self {
            transcription_engine,
            translator,
            speech_synthesizer,
            scratch_store,
        }
    }

    pub fn scratch_store(&self) -> &Arc<dyn ScratchStore> {
        &self.scratch_store
    }

    #[tracing::instrument(skip(self, request), fields(target_language = %request.target_language))]
    pub async fn run(&self, request: TranslationRequest) -> Result<TranslationOutcome, PipelineError> {
        let TranslationRequest {
            audio,
            format,
            target_language,
        } = request;

        let input_name = ScratchFileName::generate(format);
        let input = ScratchGuard::acquire(
            Arc::clone(&self.scratch_store),
            input_name.path(),
            audio,
        )
        .await?;

        let result = self.process(&input, format, target_language).await;

        match result {
            Ok(outcome) => {
                input.release().await?;
                Ok(outcome)
            }
            Err(e) => {
                if let Err(cleanup) = input.release().await {
                    tracing::warn!(error = %cleanup, "Failed to remove input audio after pipeline error");
                }
                Err(e)
            }
        }
    }

    async fn process(
        &self,
        input: &ScratchGuard,
        format: AudioFormat,
        target_language: LanguageCode,
    ) -> Result<TranslationOutcome, PipelineError> {
        let transcription = self.recognize(input, format).await?;
        if transcription.is_empty() {
            tracing::warn!("Transcription produced no text");
            return Err(PipelineError::EmptyTranscription);
        }
        let recognized_text = transcription.text.trim().to_string();

        let translation = self.translate(&recognized_text, &target_language).await?;

        let audio = self
            .speech_synthesizer
            .synthesize(&translation.text, &target_language)
            .await?;
        if audio.data.is_empty() {
            return Err(SynthesisError::InvalidResponse("empty audio".to_string()).into());
        }

        let output_name = ScratchFileName::generate(audio.format);
        let output_path = output_name.path();
        let byte_stream = stream::iter(vec![Ok::<_, io::Error>(audio.data)]).boxed();
        if let Err(e) = self.scratch_store.store(&output_path, byte_stream).await {
            if let Err(cleanup) = self.scratch_store.discard(&output_path).await {
                tracing::warn!(error = %cleanup, path = %output_path, "Failed to remove partial output audio");
            }
            return Err(e.into());
        }

        tracing::info!(
            source_language = %translation.source_language,
            audio_file = %output_name,
            "Translation pipeline completed"
        );

        Ok(TranslationOutcome {
            recognized_text,
            translated_text: translation.text,
            source_language: translation.source_language,
            target_language,
            audio_file: output_name,
        })
    }

    async fn recognize(
        &self,
        input: &ScratchGuard,
        format: AudioFormat,
    ) -> Result<TranscriptionResult, PipelineError> {
        let audio_data = self.scratch_store.fetch(input.path()).await?;
        let text = self
            .transcription_engine
            .transcribe(&audio_data, format)
            .await?;

        tracing::debug!(chars = text.len(), "Speech recognized");
        Ok(TranscriptionResult::new(text))
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &LanguageCode,
    ) -> Result<TranslationResult, PipelineError> {
        let source_language = self.translator.detect_language(text).await?;
        let translated = self
            .translator
            .translate(text, &source_language, target_language)
            .await?;

        tracing::debug!(
            source_language = %source_language,
            chars = translated.len(),
            "Text translated"
        );

        Ok(TranslationResult {
            text: translated,
            source_language,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to recognize speech")]
    EmptyTranscription,
    #[error(transparent)]
    Storage(#[from] ScratchStoreError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl PipelineError {
    /// Errors caused by the caller's input rather than by a capability failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyTranscription)
    }
}

use bytes::Bytes;

use super::audio_format::AudioFormat;
use super::language_code::LanguageCode;
use super::scratch_path::ScratchFileName;

/// One upload, alive for the duration of a single `/translate` call.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub audio: Bytes,
    pub format: AudioFormat,
    pub target_language: LanguageCode,
}

impl TranslationRequest {
    pub fn new(audio: Bytes, format: AudioFormat, target_language: LanguageCode) -> Self {
        Self {
            audio,
            format,
            target_language,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whitespace-only output counts as a failed recognition.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub text: String,
    pub source_language: LanguageCode,
}

#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub data: Bytes,
    pub format: AudioFormat,
}

/// Everything the caller gets back from a successful pipeline run.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub recognized_text: String,
    pub translated_text: String,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
    pub audio_file: ScratchFileName,
}

mod audio_format;
mod language_code;
mod scratch_path;
mod translation;

pub use audio_format::AudioFormat;
pub use language_code::{DEFAULT_TARGET_LANGUAGE, InvalidLanguageCode, LanguageCode};
pub use scratch_path::{InvalidScratchFileName, ScratchFileName, ScratchPath};
pub use translation::{
    SynthesizedAudio, TranscriptionResult, TranslationOutcome, TranslationRequest,
    TranslationResult,
};

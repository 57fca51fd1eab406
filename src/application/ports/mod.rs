mod scratch_store;
mod speech_synthesizer;
mod transcription_engine;
mod translator;

pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{TranslationError, Translator};

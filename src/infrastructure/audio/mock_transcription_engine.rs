use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioFormat;

/// Returns a fixed transcript for any non-empty clip. Used for local runs
/// without API credentials.
pub struct MockTranscriptionEngine {
    transcript: String,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new("Hello, how are you today?")
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        _format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        if audio_data.is_empty() {
            return Ok(String::new());
        }
        Ok(self.transcript.clone())
    }
}

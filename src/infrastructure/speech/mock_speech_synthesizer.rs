use bytes::{BufMut, Bytes, BytesMut};

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::{AudioFormat, LanguageCode, SynthesizedAudio};

const SAMPLE_RATE: u32 = 16_000;

/// Produces half a second of silent 16-bit mono WAV per request.
pub struct MockSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language: &LanguageCode,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        Ok(SynthesizedAudio {
            data: silent_wav(SAMPLE_RATE / 2),
            format: AudioFormat::Wav,
        })
    }
}

fn silent_wav(samples: u32) -> Bytes {
    let data_len = samples * 2;
    let mut buf = BytesMut::with_capacity(44 + data_len as usize);

    buf.put_slice(b"RIFF");
    buf.put_u32_le(36 + data_len);
    buf.put_slice(b"WAVE");
    buf.put_slice(b"fmt ");
    buf.put_u32_le(16);
    buf.put_u16_le(1); // PCM
    buf.put_u16_le(1); // mono
    buf.put_u32_le(SAMPLE_RATE);
    buf.put_u32_le(SAMPLE_RATE * 2);
    buf.put_u16_le(2);
    buf.put_u16_le(16);
    buf.put_slice(b"data");
    buf.put_u32_le(data_len);
    buf.put_bytes(0, data_len as usize);

    buf.freeze()
}

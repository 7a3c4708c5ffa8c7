use std::time::Duration;

use crate::speech::voice::Voice;

/// One bounded piece of the input text, tagged with its position in the
/// original sequence. Produced by the chunker, consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub content: String,
    pub index: usize,
}

/// Raw decoded audio for one chunk (16-bit signed little-endian mono).
#[derive(Debug, Clone)]
pub struct AudioSegment {
    pub pcm: Vec<u8>,
    pub index: usize,
}

/// Request issued to a synthesizer for a single chunk.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub prompt: String,
    pub voice: Voice,
    pub temperature: f32,
}

/// Raw audio payload returned by a synthesizer. `pcm` is `None` when the
/// model answered without an audio part.
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    pub pcm: Option<Vec<u8>>,
    pub sample_rate: u32,
}

/// A complete WAVE file plus the format parameters embedded in its header.
/// Ownership transfers to the caller; the pipeline keeps nothing.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    pub bytes: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl AudioAsset {
    /// Length of the raw PCM payload, excluding the container header.
    pub fn pcm_len(&self) -> usize {
        self.bytes.len().saturating_sub(crate::audio::wav::HEADER_LEN)
    }

    /// Approximate playback duration derived from the byte rate.
    pub fn duration(&self) -> Duration {
        let byte_rate =
            self.sample_rate as u64 * self.channels as u64 * (self.bits_per_sample as u64 / 8);
        if byte_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.pcm_len() as f64 / byte_rate as f64)
    }

    /// Timestamped name for a download link.
    pub fn suggested_file_name(&self) -> String {
        format!("speech-{}.wav", chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_matches_byte_rate() {
        // One second of 24 kHz mono 16-bit audio is 48 000 bytes.
        let asset = AudioAsset {
            bytes: vec![0; crate::audio::wav::HEADER_LEN + 48_000],
            sample_rate: 24_000,
            channels: 1,
            bits_per_sample: 16,
        };
        assert_eq!(asset.pcm_len(), 48_000);
        assert_eq!(asset.duration(), Duration::from_secs(1));
    }

    #[test]
    fn suggested_file_name_is_wav() {
        let asset = AudioAsset {
            bytes: Vec::new(),
            sample_rate: 24_000,
            channels: 1,
            bits_per_sample: 16,
        };
        let name = asset.suggested_file_name();
        assert!(name.starts_with("speech-"));
        assert!(name.ends_with(".wav"));
    }
}

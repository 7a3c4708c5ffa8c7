use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::audio::{pcm, wav};
use crate::config::{GenerationConfig, MAX_CHUNK_CHARS, MAX_INPUT_CHARS};
use crate::pipeline::chunker;
use crate::speech::error::SpeechError;
use crate::speech::provider::SpeechSynthesizer;
use crate::speech::types::{AudioAsset, AudioSegment, SynthesisRequest, TextChunk};
use crate::speech::voice::Voice;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Instruction applied to voice preview clips.
const PREVIEW_INSTRUCTION: &str = "Speak clearly and naturally.";
const PREVIEW_TEMPERATURE: f32 = 0.7;

/// Drives one narration run: chunk the text, synthesize each chunk strictly
/// in order through the injected backend, then concatenate and frame the
/// audio. Each run is independent and allocates its own buffers; a run either
/// completes fully or fails fully.
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    max_input_chars: usize,
    max_chunk_chars: usize,
}

impl Narrator {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            synthesizer,
            max_input_chars: MAX_INPUT_CHARS,
            max_chunk_chars: MAX_CHUNK_CHARS,
        }
    }

    /// Override the input ceiling and chunk budget.
    pub fn with_limits(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        max_input_chars: usize,
        max_chunk_chars: usize,
    ) -> Self {
        Self {
            synthesizer,
            max_input_chars,
            max_chunk_chars,
        }
    }

    /// Turn `text` into a single playable WAVE asset.
    ///
    /// Chunks are synthesized sequentially in ascending order, never
    /// concurrently, to bound pressure on the remote service and keep
    /// reassembly deterministic. Chunks that come back without audio are
    /// dropped with a warning; the run only fails when every chunk is empty,
    /// or immediately on the first synthesis error.
    pub async fn narrate(
        &self,
        text: &str,
        config: &GenerationConfig,
    ) -> Result<AudioAsset, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyResult);
        }

        let char_count = text.chars().count();
        if char_count > self.max_input_chars {
            return Err(SpeechError::InputTooLong {
                len: char_count,
                limit: self.max_input_chars,
            });
        }

        let chunks = chunker::chunk(text, self.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyResult);
        }

        info!(
            backend = self.synthesizer.name(),
            voice = config.voice.name(),
            chunks = chunks.len(),
            "Starting narration run"
        );

        let mut segments: Vec<AudioSegment> = Vec::with_capacity(chunks.len());
        let mut sample_rate = crate::speech::gemini::OUTPUT_SAMPLE_RATE;

        for chunk in &chunks {
            let request = SynthesisRequest {
                prompt: build_prompt(&config.style_instruction, chunk),
                voice: config.voice,
                temperature: config.clamped_temperature(),
            };

            debug!(chunk = chunk.index, bytes = chunk.content.len(), "Synthesizing chunk");

            let response = self.synthesizer.synthesize(request).await?;
            sample_rate = response.sample_rate;

            match response.pcm {
                Some(data) if !data.is_empty() => segments.push(AudioSegment {
                    pcm: data,
                    index: chunk.index,
                }),
                _ => warn!(chunk = chunk.index, "Chunk returned no audio data"),
            }
        }

        if segments.is_empty() {
            return Err(SpeechError::EmptyResult);
        }

        let combined = pcm::concatenate(&segments);
        let bytes = wav::encode(&combined, sample_rate, CHANNELS, BITS_PER_SAMPLE);

        let asset = AudioAsset {
            bytes,
            sample_rate,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
        };

        info!(
            segments = segments.len(),
            bytes = asset.bytes.len(),
            duration_secs = asset.duration().as_secs_f64(),
            "Narration run complete"
        );

        Ok(asset)
    }

    /// Generate a short sample clip so a user can audition a voice.
    pub async fn preview(&self, voice: Voice) -> Result<AudioAsset, SpeechError> {
        let sample = format!(
            "Hello, I am {}. I can read your text with this voice.",
            voice.name()
        );
        let config = GenerationConfig {
            voice,
            temperature: PREVIEW_TEMPERATURE,
            style_instruction: PREVIEW_INSTRUCTION.to_string(),
        };
        self.narrate(&sample, &config).await
    }
}

/// The remote call is stateless, so the style/persona instruction has to be
/// reapplied to every chunk, separated from the text by a blank line.
fn build_prompt(style_instruction: &str, chunk: &TextChunk) -> String {
    if style_instruction.trim().is_empty() {
        chunk.content.clone()
    } else {
        format!("{}\n\n{}", style_instruction, chunk.content)
    }
}

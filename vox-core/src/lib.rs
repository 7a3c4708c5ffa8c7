pub mod audio;
pub mod config;
pub mod pipeline;
pub mod speech;

// Public library API - if you are embedding vox as a library, I will aim to
// keep these types more stable (but everything is public so go nuts).
pub use config::{GenerationConfig, StylePreset};
pub use pipeline::Narrator;
pub use speech::error::SpeechError;
pub use speech::gemini::{GeminiConfig, GeminiSpeech};
pub use speech::provider::SpeechSynthesizer;
pub use speech::types::AudioAsset;
pub use speech::voice::Voice;

pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;
pub mod types;
pub mod voice;

pub use error::SpeechError;
pub use gemini::GeminiSpeech;
pub use provider::SpeechSynthesizer;
pub use types::*;
pub use voice::Voice;

use async_trait::async_trait;

use crate::speech::error::SpeechError;
use crate::speech::types::{SynthesisRequest, SynthesisResponse};

/// Trait for remote speech-synthesis backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Synthesize one prompt into raw PCM audio. A response that carries no
    /// audio payload is `Ok` with an empty payload, not an error; the caller
    /// decides whether to tolerate it.
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechError>;
}

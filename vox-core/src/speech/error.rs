use anyhow::anyhow;
use thiserror::Error;

/// Failure taxonomy for a narration run. Any error aborts the whole run;
/// nothing is retried internally and no partial audio is ever returned.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Text exceeds the {limit} character limit ({len} characters)")]
    InputTooLong { len: usize, limit: usize },

    #[error("The speech service encountered an internal error. Please try again. ({0})")]
    Service(anyhow::Error),

    #[error("Invalid request: {0}. Try reducing the text length or complexity.")]
    InvalidRequest(anyhow::Error),

    #[error("No audio generated.")]
    EmptyResult,

    #[error("Transport error: {0}")]
    Transport(anyhow::Error),
}

impl From<serde_json::Error> for SpeechError {
    fn from(source: serde_json::Error) -> Self {
        Self::Transport(anyhow!(source))
    }
}

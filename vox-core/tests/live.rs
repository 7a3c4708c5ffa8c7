//! Integration tests against the live Gemini speech API
//!
//! # Running live tests
//!
//! These tests require a real API key. They are marked #[ignore]
//! by default and won't run in normal CI.
//!
//! To run:
//! ```sh
//! GEMINI_API_KEY=... cargo test -p vox-core test_gemini -- --ignored
//! ```

use std::env;
use std::sync::Arc;

use vox_core::speech::gemini::{GeminiConfig, GeminiSpeech};
use vox_core::{GenerationConfig, Narrator, Voice};

#[tokio::test]
#[ignore] // Requires a Gemini API key
async fn test_gemini_narrate() {
    tracing_subscriber::fmt::init();

    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
    let synthesizer = GeminiSpeech::new(GeminiConfig::new(api_key));
    let narrator = Narrator::new(Arc::new(synthesizer));

    let text = "Hello, this is a test of text to speech.";
    println!("Synthesizing: {}", text);

    let asset = narrator
        .narrate(text, &GenerationConfig::default())
        .await
        .expect("Failed to narrate");

    println!(
        "Got {} bytes of WAV audio (~{:.1}s)",
        asset.bytes.len(),
        asset.duration().as_secs_f64()
    );

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(asset.suggested_file_name());
    std::fs::write(&path, &asset.bytes).expect("Failed to write WAV file");

    let reader = hound::WavReader::open(&path).expect("Failed to reopen WAV file");
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 24_000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert!(reader.len() > 0, "Expected non-empty audio");
}

#[tokio::test]
#[ignore] // Requires a Gemini API key
async fn test_gemini_preview_voice() {
    tracing_subscriber::fmt::init();

    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
    let synthesizer = GeminiSpeech::new(GeminiConfig::new(api_key));
    let narrator = Narrator::new(Arc::new(synthesizer));

    let asset = narrator
        .preview(Voice::Puck)
        .await
        .expect("Failed to preview voice");

    println!("Preview clip: {} bytes", asset.bytes.len());
    assert!(asset.duration().as_secs_f64() > 0.0);
}

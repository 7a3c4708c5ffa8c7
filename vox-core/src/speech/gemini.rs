//! Gemini speech-synthesis backend

use std::time::Duration;

use anyhow::anyhow;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::speech::error::SpeechError;
use crate::speech::provider::SpeechSynthesizer;
use crate::speech::types::{SynthesisRequest, SynthesisResponse};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// The TTS models emit 16-bit signed little-endian mono PCM at this rate.
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct GeminiSpeech {
    client: Client,
    config: GeminiConfig,
}

impl GeminiSpeech {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for GeminiSpeech {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechError> {
        let body = GenerateContentRequest {
            contents: vec![ContentBody {
                parts: vec![PartBody {
                    text: request.prompt,
                }],
            }],
            generation_config: GenerationConfigBody {
                response_modalities: vec!["AUDIO".to_string()],
                temperature: Some(request.temperature),
                speech_config: SpeechConfigBody {
                    voice_config: VoiceConfigBody {
                        prebuilt_voice_config: PrebuiltVoiceConfigBody {
                            voice_name: request.voice.name().to_string(),
                        },
                    },
                },
            },
        };

        debug!(
            model = %self.config.model,
            voice = request.voice.name(),
            "Dispatching synthesis request"
        );

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                debug!(?e, "Speech API call failed");
                SpeechError::Transport(anyhow!("Network error: {e}"))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| SpeechError::Transport(anyhow!("Failed to read response: {e}")))?;

        if !status.is_success() {
            debug!(?status, ?response_text, "Speech API returned error");

            if status.is_server_error() {
                return Err(SpeechError::Service(anyhow!(
                    "Speech API error {status}: {response_text}"
                )));
            }

            return Err(SpeechError::InvalidRequest(anyhow!(
                "Speech API error {status}: {response_text}"
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                SpeechError::Transport(anyhow!(
                    "Failed to parse response: {e} - Response: {response_text}"
                ))
            })?;

        let Some(data) = first_audio_payload(&parsed) else {
            return Ok(SynthesisResponse {
                pcm: None,
                sample_rate: OUTPUT_SAMPLE_RATE,
            });
        };

        let pcm = base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|e| SpeechError::Transport(anyhow!("Failed to decode audio payload: {e}")))?;

        Ok(SynthesisResponse {
            pcm: Some(pcm),
            sample_rate: OUTPUT_SAMPLE_RATE,
        })
    }
}

fn first_audio_payload(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .inline_data
        .as_ref()
        .map(|d| d.data.as_str())
}

// Gemini generateContent wire types (audio modality subset)

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<ContentBody>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfigBody,
}

#[derive(Debug, Serialize)]
struct ContentBody {
    parts: Vec<PartBody>,
}

#[derive(Debug, Serialize)]
struct PartBody {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigBody {
    response_modalities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    speech_config: SpeechConfigBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfigBody {
    voice_config: VoiceConfigBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfigBody {
    prebuilt_voice_config: PrebuiltVoiceConfigBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfigBody {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::voice::Voice;

    #[test]
    fn request_wire_shape() {
        let body = GenerateContentRequest {
            contents: vec![ContentBody {
                parts: vec![PartBody {
                    text: "Hello world.".to_string(),
                }],
            }],
            generation_config: GenerationConfigBody {
                response_modalities: vec!["AUDIO".to_string()],
                temperature: Some(0.7),
                speech_config: SpeechConfigBody {
                    voice_config: VoiceConfigBody {
                        prebuilt_voice_config: PrebuiltVoiceConfigBody {
                            voice_name: Voice::Kore.name().to_string(),
                        },
                    },
                },
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello world.");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            json["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Kore"
        );
    }

    #[test]
    fn extracts_first_audio_payload() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "audio/L16;rate=24000", "data": "AAEC"}}]
                }
            }]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_audio_payload(&parsed), Some("AAEC"));
    }

    #[test]
    fn missing_audio_payload_is_none() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#).unwrap();
        assert_eq!(first_audio_payload(&parsed), None);

        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(first_audio_payload(&parsed), None);
    }
}

use serde::{Deserialize, Serialize};

use crate::speech::voice::Voice;

/// Total input accepted before the pipeline runs at all.
pub const MAX_INPUT_CHARS: usize = 60_000;

/// Chunk budget kept well under the model's 8192-token input ceiling, with
/// margin for the style instruction prepended to every chunk.
pub const MAX_CHUNK_CHARS: usize = 4_000;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;

/// The configuration surface a UI hands the core. Immutable once a run
/// starts; issued once per pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub voice: Voice,
    pub temperature: f32,
    /// Style/persona text prepended to every chunk. May be empty.
    #[serde(default)]
    pub style_instruction: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            voice: Voice::default(),
            temperature: 0.7,
            style_instruction: String::new(),
        }
    }
}

impl GenerationConfig {
    /// Temperature forced into the model's accepted range.
    pub fn clamped_temperature(&self) -> f32 {
        self.temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
    }
}

/// A named style instruction a UI can offer as a one-click preset. Some
/// presets also pin a temperature.
#[derive(Debug, Clone, Copy)]
pub struct StylePreset {
    pub label: &'static str,
    pub text: &'static str,
    pub temperature: Option<f32>,
}

impl StylePreset {
    pub const fn all() -> [Self; 5] {
        [
            Self {
                label: "Uneasy Narrator",
                text: "The narrator speaks with a steady and natural tone. There is a slight hint of unease beneath their voice, but it does not affect the pacing. They sound like someone who has moved on from the events, yet still remembers the fear. Occasionally, a brief tension appears in their voice, but overall they speak clearly, smoothly, and with control. And it have to be realistic. Sometimes makes spaces. And this voice is talking about himself mostly.",
                temperature: Some(1.2),
            },
            Self {
                label: "Storyteller",
                text: "You are a captivating storyteller. Speak with a warm, engaging tone, using pauses for dramatic effect.",
                temperature: None,
            },
            Self {
                label: "News Anchor",
                text: "You are a professional news anchor. Speak clearly, concisely, and with an authoritative, objective tone.",
                temperature: None,
            },
            Self {
                label: "Relaxed",
                text: "Speak in a very relaxed, slow, and soothing manner, like a meditation guide.",
                temperature: None,
            },
            Self {
                label: "Excited",
                text: "You are extremely excited and energetic. Speak fast with high enthusiasm and dynamic pitch variations.",
                temperature: Some(1.5),
            },
        ]
    }

    /// Apply this preset on top of an existing configuration.
    pub fn apply(&self, config: &mut GenerationConfig) {
        config.style_instruction = self.text.to_string();
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serde_round_trip() {
        let config = GenerationConfig {
            voice: Voice::Fenrir,
            temperature: 1.3,
            style_instruction: "Speak slowly.".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: GenerationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn style_instruction_defaults_to_empty() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"voice": "Kore", "temperature": 0.7}"#).unwrap();
        assert!(config.style_instruction.is_empty());
    }

    #[test]
    fn temperature_is_clamped() {
        let mut config = GenerationConfig::default();
        config.temperature = 5.0;
        assert_eq!(config.clamped_temperature(), MAX_TEMPERATURE);
        config.temperature = -1.0;
        assert_eq!(config.clamped_temperature(), MIN_TEMPERATURE);
    }

    #[test]
    fn presets_apply_instruction_and_temperature() {
        let mut config = GenerationConfig::default();
        let excited = StylePreset::all()[4];
        excited.apply(&mut config);
        assert!(config.style_instruction.contains("energetic"));
        assert_eq!(config.temperature, 1.5);

        // A preset without a pinned temperature leaves the current one alone.
        let storyteller = StylePreset::all()[1];
        storyteller.apply(&mut config);
        assert_eq!(config.temperature, 1.5);
        assert!(config.style_instruction.contains("storyteller"));
    }
}

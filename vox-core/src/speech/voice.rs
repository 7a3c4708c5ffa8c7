use serde::{Deserialize, Serialize};

/// The prebuilt voices exposed by the speech model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::VariantArray,
)]
pub enum Voice {
    Puck,
    Charon,
    #[default]
    Kore,
    Fenrir,
    Zephyr,
    Aoede,
    Leto,
    Lore,
    Orpheus,
    Algenib,
}

impl Voice {
    /// The name the remote model expects in the voice selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Puck => "Puck",
            Self::Charon => "Charon",
            Self::Kore => "Kore",
            Self::Fenrir => "Fenrir",
            Self::Zephyr => "Zephyr",
            Self::Aoede => "Aoede",
            Self::Leto => "Leto",
            Self::Lore => "Lore",
            Self::Orpheus => "Orpheus",
            Self::Algenib => "Algenib",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Puck" => Some(Self::Puck),
            "Charon" => Some(Self::Charon),
            "Kore" => Some(Self::Kore),
            "Fenrir" => Some(Self::Fenrir),
            "Zephyr" => Some(Self::Zephyr),
            "Aoede" => Some(Self::Aoede),
            "Leto" => Some(Self::Leto),
            "Lore" => Some(Self::Lore),
            "Orpheus" => Some(Self::Orpheus),
            "Algenib" => Some(Self::Algenib),
            _ => None,
        }
    }

    pub const fn gender(self) -> &'static str {
        match self {
            Self::Kore | Self::Zephyr | Self::Aoede | Self::Leto => "Female",
            _ => "Male",
        }
    }

    /// Short label shown next to the voice in a selector UI.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Puck => "Playful & Energetic",
            Self::Charon => "Deep & Authoritative",
            Self::Kore => "Calm & Soothing",
            Self::Fenrir => "Intense & Gritty",
            Self::Zephyr => "Soft & Gentle",
            Self::Aoede => "Classy & Mature",
            Self::Leto => "Direct & Confident",
            Self::Lore => "Warm Storyteller",
            Self::Orpheus => "Confident & Energetic",
            Self::Algenib => "Steady & Uneasy",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn names_round_trip() {
        for voice in Voice::VARIANTS {
            assert_eq!(Voice::from_name(voice.name()), Some(*voice));
        }
    }

    #[test]
    fn ten_presets() {
        assert_eq!(Voice::VARIANTS.len(), 10);
    }

    #[test]
    fn default_is_kore() {
        assert_eq!(Voice::default(), Voice::Kore);
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(Voice::from_name("Joanna"), None);
    }
}

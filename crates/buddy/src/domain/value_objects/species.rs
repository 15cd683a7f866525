//! Species - What kind of animal the pet is (cosmetic only)

use serde::{Deserialize, Serialize};

use super::PetEmotion;
use crate::domain::errors::DomainError;

/// Pet species
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    #[default]
    Cat,
    Dog,
    Bird,
    Dragon,
}

impl Species {
    /// Avatar glyph for this species showing the given emotion
    pub fn avatar(&self, emotion: PetEmotion) -> &'static str {
        match (self, emotion) {
            (Species::Cat, PetEmotion::Happy) => "😸",
            (Species::Cat, PetEmotion::Sad) => "😿",
            (Species::Cat, PetEmotion::Tired) => "😴",
            (Species::Cat, PetEmotion::Hungry) => "🙀",
            (Species::Cat, _) => "😺",

            (Species::Dog, PetEmotion::Happy) => "🐕",
            (Species::Dog, PetEmotion::Sad) => "😢🐕",
            (Species::Dog, PetEmotion::Tired) => "😴🐕",
            (Species::Dog, PetEmotion::Hungry) => "🥺🐕",
            (Species::Dog, _) => "🐶",

            (Species::Bird, PetEmotion::Happy) => "🐦",
            (Species::Bird, PetEmotion::Sad) => "😢🐦",
            (Species::Bird, PetEmotion::Tired) => "😴🐦",
            (Species::Bird, PetEmotion::Hungry) => "🥺🐦",
            (Species::Bird, _) => "🐤",

            (Species::Dragon, PetEmotion::Happy) => "🐲",
            (Species::Dragon, PetEmotion::Sad) => "😢🐲",
            (Species::Dragon, PetEmotion::Tired) => "😴🐲",
            (Species::Dragon, PetEmotion::Hungry) => "🥺🐲",
            (Species::Dragon, _) => "🐉",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Cat => write!(f, "cat"),
            Species::Dog => write!(f, "dog"),
            Species::Bird => write!(f, "bird"),
            Species::Dragon => write!(f, "dragon"),
        }
    }
}

impl std::str::FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            "bird" => Ok(Species::Bird),
            "dragon" => Ok(Species::Dragon),
            _ => Err(DomainError::validation(format!("Unknown species: {}", s))),
        }
    }
}

//! PetEmotion - Display state of the pet

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// The six emotions a pet can show
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PetEmotion {
    Happy,
    Sad,
    Excited,
    Tired,
    Hungry,
    #[default]
    Content,
}

impl PetEmotion {
    pub const ALL: [PetEmotion; 6] = [
        PetEmotion::Happy,
        PetEmotion::Sad,
        PetEmotion::Excited,
        PetEmotion::Tired,
        PetEmotion::Hungry,
        PetEmotion::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetEmotion::Happy => "happy",
            PetEmotion::Sad => "sad",
            PetEmotion::Excited => "excited",
            PetEmotion::Tired => "tired",
            PetEmotion::Hungry => "hungry",
            PetEmotion::Content => "content",
        }
    }
}

impl std::fmt::Display for PetEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PetEmotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(PetEmotion::Happy),
            "sad" => Ok(PetEmotion::Sad),
            "excited" => Ok(PetEmotion::Excited),
            "tired" => Ok(PetEmotion::Tired),
            "hungry" => Ok(PetEmotion::Hungry),
            "content" => Ok(PetEmotion::Content),
            _ => Err(DomainError::validation(format!("Unknown pet emotion: {}", s))),
        }
    }
}

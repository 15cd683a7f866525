//! UserEmotion - Emotion reported by an external source (quick-action button, detector)

use serde::{Deserialize, Serialize};

use super::PetEmotion;
use crate::domain::errors::DomainError;

/// A detected user emotion the pet reacts to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserEmotion {
    Happy,
    Sad,
    Stressed,
    Tired,
    Focused,
    Excited,
}

impl UserEmotion {
    pub const ALL: [UserEmotion; 6] = [
        UserEmotion::Happy,
        UserEmotion::Sad,
        UserEmotion::Stressed,
        UserEmotion::Tired,
        UserEmotion::Focused,
        UserEmotion::Excited,
    ];

    /// The emotion the pet mirrors back: calm for low moods, happy otherwise
    pub fn pet_response(&self) -> PetEmotion {
        match self {
            UserEmotion::Sad | UserEmotion::Stressed => PetEmotion::Content,
            _ => PetEmotion::Happy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserEmotion::Happy => "happy",
            UserEmotion::Sad => "sad",
            UserEmotion::Stressed => "stressed",
            UserEmotion::Tired => "tired",
            UserEmotion::Focused => "focused",
            UserEmotion::Excited => "excited",
        }
    }
}

impl std::fmt::Display for UserEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserEmotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(UserEmotion::Happy),
            "sad" => Ok(UserEmotion::Sad),
            "stressed" => Ok(UserEmotion::Stressed),
            "tired" => Ok(UserEmotion::Tired),
            "focused" => Ok(UserEmotion::Focused),
            "excited" => Ok(UserEmotion::Excited),
            _ => Err(DomainError::validation(format!("Unknown user emotion: {}", s))),
        }
    }
}

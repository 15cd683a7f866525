//! MessageTone - Emotional tag attached to a pet message

use serde::{Deserialize, Serialize};

use super::{PetEmotion, UserEmotion};

/// Tone of a logged pet message.
///
/// Covers every pet emotion, the user emotions a reply can be tagged with,
/// and `Supportive` for unprompted motivation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageTone {
    Happy,
    Sad,
    Excited,
    Tired,
    Hungry,
    Content,
    Stressed,
    Focused,
    Supportive,
}

impl From<PetEmotion> for MessageTone {
    fn from(emotion: PetEmotion) -> Self {
        match emotion {
            PetEmotion::Happy => MessageTone::Happy,
            PetEmotion::Sad => MessageTone::Sad,
            PetEmotion::Excited => MessageTone::Excited,
            PetEmotion::Tired => MessageTone::Tired,
            PetEmotion::Hungry => MessageTone::Hungry,
            PetEmotion::Content => MessageTone::Content,
        }
    }
}

impl From<UserEmotion> for MessageTone {
    fn from(emotion: UserEmotion) -> Self {
        match emotion {
            UserEmotion::Happy => MessageTone::Happy,
            UserEmotion::Sad => MessageTone::Sad,
            UserEmotion::Stressed => MessageTone::Stressed,
            UserEmotion::Tired => MessageTone::Tired,
            UserEmotion::Focused => MessageTone::Focused,
            UserEmotion::Excited => MessageTone::Excited,
        }
    }
}

impl std::fmt::Display for MessageTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageTone::Happy => write!(f, "happy"),
            MessageTone::Sad => write!(f, "sad"),
            MessageTone::Excited => write!(f, "excited"),
            MessageTone::Tired => write!(f, "tired"),
            MessageTone::Hungry => write!(f, "hungry"),
            MessageTone::Content => write!(f, "content"),
            MessageTone::Stressed => write!(f, "stressed"),
            MessageTone::Focused => write!(f, "focused"),
            MessageTone::Supportive => write!(f, "supportive"),
        }
    }
}

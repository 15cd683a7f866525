//! Canned pet lines
//!
//! Fixed pools the pet picks from. Selection takes an injected RNG so a
//! seeded generator gives a repeatable conversation.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::value_objects::{PetEmotion, UserEmotion};

pub const FEED_LINES: &[&str] = &[
    "Yum! That was delicious! Thank you! 🍎",
    "I feel so much better now! Ready to support you! 💪",
    "Food makes everything better! Let's study! 📚",
];

pub const PLAY_LINES: &[&str] = &[
    "That was so fun! I'm energized now! ⚡",
    "Playing with you is the best! Let's get back to work! 🎮",
    "I love our play time! You're the best study buddy! 💝",
];

pub const REST_LINES: &[&str] = &["Ahh, that nap was refreshing! Ready to help you study! 😴✨"];

pub const MOTIVATION_LINES: &[&str] = &[
    "Every small step counts towards your goals! 🎯",
    "You're building great study habits! I'm proud! 👏",
    "Remember: progress, not perfection! 📈",
    "Your dedication is inspiring me too! 💪",
    "Let's make today count together! ✨",
];

const HAPPY_LINES: &[&str] = &[
    "I'm so happy to see you smiling! 😊",
    "Your joy is contagious! Keep up the great work! ✨",
    "You look amazing today! Let's study together! 📚",
];

const SAD_LINES: &[&str] = &[
    "I'm here for you. Want to take a short break? 💙",
    "It's okay to feel sad sometimes. I believe in you! 🤗",
    "Let's do something fun together to cheer you up! 🎮",
];

const STRESSED_LINES: &[&str] = &[
    "I can sense you're stressed. Let's try some deep breathing! 🧘‍♀️",
    "Remember to take breaks! You're doing great! 💪",
    "Stress is temporary, but your progress is lasting! 📈",
];

const TIRED_LINES: &[&str] = &[
    "You look tired! Maybe it's time for a power nap? 😴",
    "Rest is important too! I'll be here when you're ready! 💤",
    "Let's recharge together! You've earned a break! ⚡",
];

const FOCUSED_LINES: &[&str] = &[
    "I love seeing you so focused! You're in the zone! 🎯",
    "Your concentration is amazing! Keep it up! 🔥",
    "Focus mode activated! I'm cheering you on silently! 📚",
];

const EXCITED_LINES: &[&str] = &[
    "Your excitement is awesome! Channel that energy! ⚡",
    "I love your enthusiasm! Let's tackle those tasks! 🚀",
    "Your positive energy is inspiring! Keep going! ⭐",
];

const HUNGRY_DECAY_LINES: &[&str] = &["I'm getting a bit hungry... 🥺"];

const TIRED_DECAY_LINES: &[&str] = &["I'm feeling sleepy... maybe we should rest? 😴"];

/// Replies to a detected user emotion
pub fn user_emotion_lines(emotion: UserEmotion) -> &'static [&'static str] {
    match emotion {
        UserEmotion::Happy => HAPPY_LINES,
        UserEmotion::Sad => SAD_LINES,
        UserEmotion::Stressed => STRESSED_LINES,
        UserEmotion::Tired => TIRED_LINES,
        UserEmotion::Focused => FOCUSED_LINES,
        UserEmotion::Excited => EXCITED_LINES,
    }
}

/// Complaints for a decay transition. Emotions decay never produces
/// fall back to the motivation pool.
pub fn decay_lines(emotion: PetEmotion) -> &'static [&'static str] {
    match emotion {
        PetEmotion::Hungry => HUNGRY_DECAY_LINES,
        PetEmotion::Tired => TIRED_DECAY_LINES,
        _ => MOTIVATION_LINES,
    }
}

/// Pick one line uniformly at random
pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

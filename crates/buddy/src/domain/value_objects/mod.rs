//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod message_tone;
mod pet_emotion;
mod species;
mod user_emotion;

pub use message_tone::*;
pub use pet_emotion::*;
pub use species::*;
pub use user_emotion::*;

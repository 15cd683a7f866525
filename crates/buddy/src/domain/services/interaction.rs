//! Interaction rules - What feeding, playing and resting do to a pet
//!
//! Each rule reads the current pet and returns the [`PetUpdate`] to apply.
//! Clamping happens in [`Pet::apply`]; the raw values here may overshoot.

use crate::domain::entities::{level_for, Pet, PetUpdate};
use crate::domain::value_objects::PetEmotion;

pub const FEED_HUNGER_RELIEF: i32 = 30;
pub const FEED_HAPPINESS_GAIN: i32 = 15;
pub const PLAY_HAPPINESS_GAIN: i32 = 20;
pub const PLAY_ENERGY_COST: i32 = 10;
pub const PLAY_EXPERIENCE_GAIN: u32 = 10;
pub const REST_ENERGY_GAIN: i32 = 40;

pub fn feed(pet: &Pet) -> PetUpdate {
    PetUpdate {
        hunger: Some(pet.hunger - FEED_HUNGER_RELIEF),
        happiness: Some(pet.happiness + FEED_HAPPINESS_GAIN),
        ..Default::default()
    }
}

/// Play costs energy and earns experience. Levels cascade while the
/// experience still covers the next threshold; experience is not reset.
pub fn play(pet: &Pet) -> PetUpdate {
    let experience = pet.experience.saturating_add(PLAY_EXPERIENCE_GAIN);
    PetUpdate {
        happiness: Some(pet.happiness + PLAY_HAPPINESS_GAIN),
        energy: Some(pet.energy - PLAY_ENERGY_COST),
        experience: Some(experience),
        level: Some(level_for(pet.level, experience)),
        ..Default::default()
    }
}

pub fn rest(pet: &Pet) -> PetUpdate {
    PetUpdate {
        energy: Some(pet.energy + REST_ENERGY_GAIN),
        ..Default::default()
    }
}

pub fn set_emotion(emotion: PetEmotion) -> PetUpdate {
    PetUpdate::emotion(emotion)
}

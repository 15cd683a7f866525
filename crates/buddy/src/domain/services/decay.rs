//! Passive decay - Emotion changes caused by neglect
//!
//! Pure evaluation: the caller decides when to poll and applies the
//! transition through the normal emotion update.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Pet;
use crate::domain::value_objects::PetEmotion;

/// Thresholds for passive decay
#[derive(Debug, Clone)]
pub struct DecayRules {
    /// Idle hours before hunger shows
    pub hungry_after_hours: f64,
    /// Fullness below which the pet counts as hungry
    pub hungry_below_fullness: i32,
    /// Idle hours before tiredness shows
    pub tired_after_hours: f64,
    /// Energy below which the pet counts as tired
    pub tired_below_energy: i32,
}

impl Default for DecayRules {
    fn default() -> Self {
        Self {
            hungry_after_hours: 2.0,
            hungry_below_fullness: 50,
            tired_after_hours: 4.0,
            tired_below_energy: 30,
        }
    }
}

/// A forced emotion change produced by a decay check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayTransition {
    pub emotion: PetEmotion,
    pub hours_idle: f64,
}

/// Hunger is checked before tiredness; at most one transition per check.
pub fn evaluate(pet: &Pet, now: DateTime<Utc>, rules: &DecayRules) -> Option<DecayTransition> {
    let hours_idle = pet.hours_since_interaction(now);

    if hours_idle > rules.hungry_after_hours && pet.fullness() < rules.hungry_below_fullness {
        return Some(DecayTransition {
            emotion: PetEmotion::Hungry,
            hours_idle,
        });
    }

    if hours_idle > rules.tired_after_hours && pet.energy < rules.tired_below_energy {
        return Some(DecayTransition {
            emotion: PetEmotion::Tired,
            hours_idle,
        });
    }

    None
}

//! Pet - The virtual study buddy
//!
//! Pure domain entity without infrastructure dependencies.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{PetEmotion, Species};

/// Lower bound for percentage stats (happiness, energy, hunger)
pub const STAT_MIN: i32 = 0;
/// Upper bound for percentage stats
pub const STAT_MAX: i32 = 100;

/// Saturate a percentage stat into `[STAT_MIN, STAT_MAX]`
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Pet - Core companion entity, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    /// User identity the pet is stored under
    pub owner_id: String,
    pub name: String,
    pub species: Species,
    pub level: u32,
    pub experience: u32,
    pub happiness: i32,
    pub energy: i32,
    /// 0 = full, 100 = starving
    pub hunger: i32,
    pub current_emotion: PetEmotion,
    pub last_interaction: DateTime<Utc>,
    pub achievements: BTreeSet<String>,
    /// Host-owned cosmetic settings, opaque to the engine
    pub customization: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where an update came from.
///
/// Only interactions move `last_interaction`; bookkeeping such as
/// awarding a badge touches `updated_at` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    Interaction,
    System,
}

/// Partial set of attribute changes, merged by [`Pet::apply`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetUpdate {
    pub level: Option<u32>,
    pub experience: Option<u32>,
    pub happiness: Option<i32>,
    pub energy: Option<i32>,
    pub hunger: Option<i32>,
    pub current_emotion: Option<PetEmotion>,
    /// Badges to add; existing badges are never removed
    pub achievements: Vec<String>,
    pub customization: Option<serde_json::Value>,
}

impl PetUpdate {
    pub fn emotion(emotion: PetEmotion) -> Self {
        Self {
            current_emotion: Some(emotion),
            ..Default::default()
        }
    }
}

impl Pet {
    /// Create a fresh pet with starter stats
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        species: Species,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let owner_id: String = owner_id.into();
        let name: String = name.into();
        let name = name.trim().to_string();

        if owner_id.trim().is_empty() {
            return Err(DomainError::validation("Pet owner id must not be empty"));
        }
        if name.is_empty() {
            return Err(DomainError::validation("Pet name must not be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            species,
            level: 1,
            experience: 0,
            happiness: 80,
            energy: 70,
            hunger: 40,
            current_emotion: PetEmotion::Content,
            last_interaction: now,
            achievements: BTreeSet::new(),
            customization: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        })
    }

    /// Inverse of hunger, the value shown on the "full" bar
    pub fn fullness(&self) -> i32 {
        STAT_MAX - self.hunger
    }

    /// Experience needed to reach the next level
    pub fn next_level_threshold(&self) -> u32 {
        level_threshold(self.level)
    }

    /// Percentage towards the next level, capped at 100
    pub fn level_progress(&self) -> u32 {
        let threshold = self.next_level_threshold().max(1);
        (self.experience.saturating_mul(100) / threshold).min(100)
    }

    pub fn avatar(&self) -> &'static str {
        self.species.avatar(self.current_emotion)
    }

    /// Fractional hours between the last interaction and `now`.
    /// Negative when `now` is before the stamp.
    pub fn hours_since_interaction(&self, now: DateTime<Utc>) -> f64 {
        (now - self.last_interaction).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Merge a partial update. Stats are clamped and level never drops below 1.
    pub fn apply(&mut self, update: PetUpdate, now: DateTime<Utc>, origin: UpdateOrigin) {
        if let Some(level) = update.level {
            self.level = level.max(1);
        }
        if let Some(experience) = update.experience {
            self.experience = experience;
        }
        if let Some(happiness) = update.happiness {
            self.happiness = clamp_stat(happiness);
        }
        if let Some(energy) = update.energy {
            self.energy = clamp_stat(energy);
        }
        if let Some(hunger) = update.hunger {
            self.hunger = clamp_stat(hunger);
        }
        if let Some(emotion) = update.current_emotion {
            self.current_emotion = emotion;
        }
        for badge in update.achievements {
            self.achievements.insert(badge);
        }
        if let Some(customization) = update.customization {
            self.customization = customization;
        }

        if origin == UpdateOrigin::Interaction {
            self.last_interaction = self.last_interaction.max(now);
        }
        self.updated_at = self.updated_at.max(now);
    }

    pub fn has_achievement(&self, name: &str) -> bool {
        self.achievements.contains(name)
    }

    /// Pull a stored snapshot back inside the entity invariants.
    ///
    /// Stats are clamped and the level is raised to what the experience
    /// already covers (at least 1). Stamps are left alone.
    pub fn normalized(mut self) -> Self {
        self.happiness = clamp_stat(self.happiness);
        self.energy = clamp_stat(self.energy);
        self.hunger = clamp_stat(self.hunger);
        self.level = level_for(self.level, self.experience);
        self
    }
}

/// Experience required to move from `level` to `level + 1`
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_add(1).saturating_mul(100)
}

/// Highest level reachable from `level` with `experience`.
///
/// Level `n` needs `n * 100` cumulative experience, so this is
/// `experience / 100` unless the pet already sits higher. Never below 1.
pub fn level_for(level: u32, experience: u32) -> u32 {
    level.max(experience / 100).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pet() -> Pet {
        Pet::new("user-1", "Buddy", Species::Cat, Utc::now()).unwrap()
    }

    #[test]
    fn test_new_pet_has_starter_stats() {
        let pet = pet();
        assert_eq!(pet.level, 1);
        assert_eq!(pet.experience, 0);
        assert_eq!(pet.happiness, 80);
        assert_eq!(pet.energy, 70);
        assert_eq!(pet.hunger, 40);
        assert_eq!(pet.current_emotion, PetEmotion::Content);
        assert!(pet.achievements.is_empty());
        assert_eq!(pet.fullness(), 60);
        assert_eq!(pet.avatar(), "😺");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Pet::new("user-1", "   ", Species::Dog, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_blank_owner_is_rejected() {
        assert!(Pet::new("", "Rex", Species::Dog, Utc::now()).is_err());
    }

    #[test]
    fn test_apply_clamps_stats() {
        let mut pet = pet();
        let update = PetUpdate {
            happiness: Some(250),
            energy: Some(-40),
            hunger: Some(101),
            ..Default::default()
        };
        pet.apply(update, Utc::now(), UpdateOrigin::Interaction);

        assert_eq!(pet.happiness, 100);
        assert_eq!(pet.energy, 0);
        assert_eq!(pet.hunger, 100);
    }

    #[test]
    fn test_interaction_stamp_never_moves_backwards() {
        let mut pet = pet();
        let before = pet.last_interaction;
        pet.apply(
            PetUpdate::emotion(PetEmotion::Happy),
            before - Duration::hours(1),
            UpdateOrigin::Interaction,
        );
        assert_eq!(pet.last_interaction, before);

        let later = before + Duration::minutes(5);
        pet.apply(PetUpdate::default(), later, UpdateOrigin::Interaction);
        assert_eq!(pet.last_interaction, later);
    }

    #[test]
    fn test_system_update_leaves_interaction_stamp() {
        let mut pet = pet();
        let before = pet.last_interaction;
        let later = before + Duration::hours(3);
        pet.apply(
            PetUpdate {
                achievements: vec!["first_task".into()],
                ..Default::default()
            },
            later,
            UpdateOrigin::System,
        );

        assert_eq!(pet.last_interaction, before);
        assert_eq!(pet.updated_at, later);
        assert!(pet.has_achievement("first_task"));
    }

    #[test]
    fn test_level_progress() {
        let mut pet = pet();
        pet.experience = 50;
        assert_eq!(pet.next_level_threshold(), 200);
        assert_eq!(pet.level_progress(), 25);

        pet.experience = 900;
        assert_eq!(pet.level_progress(), 100);
    }

    #[test]
    fn test_level_for_handles_extreme_experience() {
        assert_eq!(level_for(42_949_670, u32::MAX), 42_949_672);
        assert_eq!(level_for(u32::MAX, u32::MAX), u32::MAX);
        assert_eq!(level_for(7, 250), 7);
    }

    #[test]
    fn test_normalized_repairs_out_of_range_snapshot() {
        let mut stored = pet();
        stored.happiness = 500;
        stored.energy = 55;
        stored.hunger = -20;
        stored.level = 0;
        stored.experience = 320;

        let pet = stored.clone().normalized();
        assert_eq!(pet.happiness, 100);
        assert_eq!(pet.energy, 55);
        assert_eq!(pet.hunger, 0);
        assert_eq!(pet.level, 3);
        assert_eq!(pet.last_interaction, stored.last_interaction);
    }

    #[test]
    fn test_normalized_keeps_valid_pet() {
        let pet = pet();
        assert_eq!(pet.clone().normalized(), pet);
    }

    #[test]
    fn test_hours_since_interaction() {
        let pet = pet();
        let now = pet.last_interaction + Duration::minutes(90);
        assert!((pet.hours_since_interaction(now) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_achievements_as_list() {
        let mut pet = pet();
        pet.achievements.insert("study_streak_7".into());
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["achievements"], serde_json::json!(["study_streak_7"]));
        assert_eq!(json["species"], "cat");
        assert_eq!(json["current_emotion"], "content");
    }
}

//! Engine configuration
//!
//! Read from `BUDDY_*` environment variables. Values that fail to parse
//! keep their defaults and log a warning.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use buddy::{Species, DEFAULT_LOG_CAPACITY};

use crate::services::scheduler::SchedulerConfig;

/// Settings for one pet session
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// User identity the pet is stored under
    pub owner_id: String,
    /// Name for a newly created pet
    pub pet_name: String,
    /// Species for a newly created pet
    pub species: Species,
    /// Directory for JSON snapshots; `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
    /// Number of messages kept in the log
    pub message_log_capacity: usize,
    /// Chance per motivation tick that the pet says something, in `[0, 1]`
    pub motivation_chance: f64,
    /// Seed for message selection; `None` draws from OS entropy
    pub rng_seed: Option<u64>,
    pub scheduler: SchedulerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            owner_id: "local".to_string(),
            pet_name: "Buddy".to_string(),
            species: Species::Cat,
            data_dir: None,
            message_log_capacity: DEFAULT_LOG_CAPACITY,
            motivation_chance: 0.3,
            rng_seed: None,
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let decay_secs = parse_or(
            "BUDDY_DECAY_INTERVAL_SECS",
            get("BUDDY_DECAY_INTERVAL_SECS"),
            defaults.scheduler.decay_interval.as_secs(),
        );
        let motivation_secs = parse_or(
            "BUDDY_MOTIVATION_INTERVAL_SECS",
            get("BUDDY_MOTIVATION_INTERVAL_SECS"),
            defaults.scheduler.motivation_interval.as_secs(),
        );

        Self {
            owner_id: get("BUDDY_OWNER_ID").unwrap_or(defaults.owner_id),
            pet_name: get("BUDDY_PET_NAME").unwrap_or(defaults.pet_name),
            species: parse_or("BUDDY_PET_SPECIES", get("BUDDY_PET_SPECIES"), defaults.species),
            data_dir: get("BUDDY_DATA_DIR").map(PathBuf::from),
            message_log_capacity: parse_or(
                "BUDDY_MESSAGE_LOG_CAPACITY",
                get("BUDDY_MESSAGE_LOG_CAPACITY"),
                defaults.message_log_capacity,
            )
            .max(1),
            motivation_chance: parse_or(
                "BUDDY_MOTIVATION_CHANCE",
                get("BUDDY_MOTIVATION_CHANCE"),
                defaults.motivation_chance,
            ),
            rng_seed: get("BUDDY_RNG_SEED").and_then(|v| match v.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!("⚠️  Ignoring invalid BUDDY_RNG_SEED: {}", v);
                    None
                }
            }),
            scheduler: SchedulerConfig {
                decay_interval: Duration::from_secs(decay_secs.max(1)),
                motivation_interval: Duration::from_secs(motivation_secs.max(1)),
                enabled: parse_or(
                    "BUDDY_SCHEDULER_ENABLED",
                    get("BUDDY_SCHEDULER_ENABLED"),
                    defaults.scheduler.enabled,
                ),
            },
        }
        .normalized()
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn with_pet(mut self, name: impl Into<String>, species: Species) -> Self {
        self.pet_name = name.into();
        self.species = species;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_motivation_chance(mut self, chance: f64) -> Self {
        self.motivation_chance = chance;
        self.normalized()
    }

    pub fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
        self.scheduler = scheduler;
        self
    }

    fn normalized(mut self) -> Self {
        self.motivation_chance = probability(self.motivation_chance);
        self
    }
}

/// Clamp into `[0, 1]`; NaN and infinities become 0
pub(crate) fn probability(chance: f64) -> f64 {
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  Ignoring invalid {}: {}", key, value);
            default
        }),
        None => default,
    }
}

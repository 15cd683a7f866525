//! Buddy Domain Library
//!
//! Core domain types and interfaces for the Study Buddy virtual pet.
//!
//! # Architecture
//!
//! This crate follows the same layering as a hexagonal service:
//!
//! - **Domain Layer** (`domain/`): Pure entities and rules
//!   - `entities/`: Core domain models (Pet, MessageEntry, MessageLog)
//!   - `value_objects/`: Closed enums (Species, PetEmotion, UserEmotion, MessageTone)
//!   - `services/`: Stateless rules (interaction effects, decay, canned lines)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Pet persistence
//!   - `services/`: Clock
//!
//! # Usage
//!
//! ```rust,ignore
//! use buddy::domain::{Pet, Species};
//! use buddy::ports::{PetRepository, Clock};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    clamp_stat, level_for, level_threshold, DomainError, MessageEntry, MessageLog, MessageTone,
    Pet, PetEmotion, PetUpdate, Species, UpdateOrigin, UserEmotion, DEFAULT_LOG_CAPACITY,
    STAT_MAX, STAT_MIN,
};
pub use domain::services::{decay, interaction, responses};
pub use ports::{Clock, ManualClock, PetRepository, SystemClock};

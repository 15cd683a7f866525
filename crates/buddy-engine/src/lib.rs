//! Buddy Engine
//!
//! Runs one pet per user session on top of the `buddy` domain crate.
//!
//! - `application/`: [`PetSession`], the single owner of the pet and its message log
//! - `adapters/`: [`PetRepository`](buddy::PetRepository) implementations
//! - `services/`: Background decay and motivation scheduler
//! - `config`: Environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod services;

pub use adapters::{InMemoryPetRepository, JsonFilePetRepository};
pub use application::PetSession;
pub use config::EngineConfig;
pub use services::scheduler::{PetScheduler, SchedulerConfig, SchedulerHandle};

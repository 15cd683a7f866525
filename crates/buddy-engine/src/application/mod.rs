//! Application Layer (Use Cases)
//!
//! Orchestrates domain rules and coordinates with the repository.

mod pet_session;

pub use pet_session::PetSession;

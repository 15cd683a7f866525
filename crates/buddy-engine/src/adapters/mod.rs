//! Infrastructure Adapters
//!
//! Implementations of domain ports for storage.

pub mod json_file;
pub mod memory;

// Re-exports
pub use json_file::JsonFilePetRepository;
pub use memory::InMemoryPetRepository;

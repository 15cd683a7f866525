//! Pet Repository Port
//!
//! Abstract interface for Pet persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Pet};

/// Repository interface for Pet snapshots, keyed by owner
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Find the pet stored for an owner
    async fn find_by_owner(&self, owner_id: &str) -> Result<Option<Pet>, DomainError>;

    /// Save a pet snapshot (insert or replace)
    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError>;
}

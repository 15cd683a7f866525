//! In-memory implementation of PetRepository
//!
//! Keeps snapshots for the lifetime of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use buddy::{DomainError, Pet, PetRepository};

/// In-memory implementation of PetRepository
#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<HashMap<String, Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with one pet
    pub fn with_pet(pet: Pet) -> Self {
        let mut pets = HashMap::new();
        pets.insert(pet.owner_id.clone(), pet);
        Self {
            pets: RwLock::new(pets),
        }
    }

    pub async fn len(&self) -> usize {
        self.pets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pets.read().await.is_empty()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn find_by_owner(&self, owner_id: &str) -> Result<Option<Pet>, DomainError> {
        Ok(self.pets.read().await.get(owner_id).cloned())
    }

    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError> {
        self.pets
            .write()
            .await
            .insert(pet.owner_id.clone(), pet.clone());
        Ok(pet.clone())
    }
}

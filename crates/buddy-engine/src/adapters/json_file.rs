//! JSON file implementation of PetRepository
//!
//! One pretty-printed `<owner>.json` per owner under a data directory.
//! Writes go to a temp file first and are renamed into place.

use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use buddy::{DomainError, Pet, PetRepository};

/// File-backed implementation of PetRepository
#[derive(Debug, Clone)]
pub struct JsonFilePetRepository {
    dir: PathBuf,
}

impl JsonFilePetRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Snapshot path for an owner.
    ///
    /// ASCII letters, digits and `-` are kept; every other byte, `_`
    /// included, is written as `_xx` hex. Distinct owners never share a file.
    pub fn path_for(&self, owner_id: &str) -> PathBuf {
        let mut file_stem = String::with_capacity(owner_id.len());
        for byte in owner_id.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_stem.push(char::from(byte));
            } else {
                let _ = write!(file_stem, "_{:02x}", byte);
            }
        }
        self.dir.join(format!("{}.json", file_stem))
    }
}

#[async_trait]
impl PetRepository for JsonFilePetRepository {
    async fn find_by_owner(&self, owner_id: &str) -> Result<Option<Pet>, DomainError> {
        let path = self.path_for(owner_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::repository(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let pet: Pet = serde_json::from_slice(&bytes)?;
        if pet.owner_id != owner_id {
            tracing::warn!(
                "⚠️  {} holds a pet for {}, not {}",
                path.display(),
                pet.owner_id,
                owner_id
            );
            return Err(DomainError::validation(format!(
                "Snapshot {} belongs to another owner",
                path.display()
            )));
        }
        Ok(Some(pet))
    }

    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError> {
        let path = self.path_for(&pet.owner_id);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(pet)?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            DomainError::repository(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;
        tokio::fs::write(&tmp, &body).await.map_err(|e| {
            DomainError::repository(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            DomainError::repository(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        tracing::debug!("💾 Saved pet {} to {}", pet.id, path.display());
        Ok(pet.clone())
    }
}

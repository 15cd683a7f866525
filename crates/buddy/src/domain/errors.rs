//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn validation<T: AsRef<str>>(message: T) -> Self {
        Self::Validation(message.as_ref().to_string())
    }

    pub fn repository<T: std::fmt::Display>(err: T) -> Self {
        Self::Repository(err.to_string())
    }

    /// Whether retrying the same call may succeed.
    ///
    /// Only storage failures qualify; validation and serialization problems
    /// will fail the same way on every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

//! Durable credential storage port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the durable credential store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("credential storage I/O error: {0}")]
    Io(String),

    /// The backing store is not available on this system.
    #[error("credential storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for persisting the single bearer credential.
///
/// Holds at most one value. Implementations store the raw string as given;
/// normalization is the token store's concern.
#[async_trait]
pub trait CredentialStorage: Send + Sync {
    /// Reads the persisted value, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persists a value, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn store(&self, value: &str) -> Result<(), StorageError>;

    /// Removes the persisted value. Succeeds if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn clear(&self) -> Result<(), StorageError>;
}

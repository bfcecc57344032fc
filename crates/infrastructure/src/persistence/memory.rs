//! In-memory credential storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use agora_application::ports::{CredentialStorage, StorageError};

/// Credential storage that lives only as long as the process.
///
/// For ephemeral sessions and tests; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStorage {
    value: RwLock<Option<String>>,
}

impl MemoryCredentialStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStorage for MemoryCredentialStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.read().await.clone())
    }

    async fn store(&self, value: &str) -> Result<(), StorageError> {
        *self.value.write().await = Some(value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.value.write().await = None;
        Ok(())
    }
}

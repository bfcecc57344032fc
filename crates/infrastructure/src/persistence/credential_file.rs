//! File-backed credential storage.
//!
//! The single bearer credential lives in a plain file, by default
//! `<config dir>/agora/credential`. A missing file is the anonymous
//! state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use agora_application::ports::{CredentialStorage, StorageError};

/// Durable credential storage backed by one file.
#[derive(Debug, Clone)]
pub struct FileCredentialStorage {
    path: PathBuf,
}

impl FileCredentialStorage {
    /// Creates storage at an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates storage at the platform's default location,
    /// `<config dir>/agora/credential`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the platform exposes no
    /// configuration directory.
    pub fn default_location() -> Result<Self, StorageError> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("agora").join("credential")))
            .ok_or_else(|| {
                StorageError::Unavailable("no configuration directory on this platform".to_string())
            })
    }

    /// The file this storage reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(err: &std::io::Error) -> StorageError {
        StorageError::Io(err.to_string())
    }
}

#[async_trait]
impl CredentialStorage for FileCredentialStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let value = contents.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(&err)),
        }
    }

    async fn store(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error(&e))?;
        }
        fs::write(&self.path, value)
            .await
            .map_err(|e| Self::io_error(&e))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(&err)),
        }
    }
}

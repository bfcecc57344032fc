//! Process-wide holder of the bearer credential.
//!
//! A thin, cloneable handle over the durable [`CredentialStorage`] port.
//! Every read normalizes the stored value, so a legacy un-prefixed token
//! persisted by an older build still comes back canonical.

use std::sync::Arc;

use tracing::warn;

use agora_domain::Credential;

use crate::error::{ApiError, ApiResult};
use crate::ports::CredentialStorage;

/// Cloneable handle to the single persisted credential.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn CredentialStorage>,
}

impl TokenStore {
    /// Creates a store over the given durable storage.
    #[must_use]
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self { storage }
    }

    /// Reads the current credential, normalized to canonical form.
    ///
    /// Storage read failures degrade to the anonymous state: a request
    /// should go out without auth rather than fail before the wire.
    pub async fn get(&self) -> Option<Credential> {
        let raw = match self.storage.load().await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "credential storage read failed; treating as anonymous");
                return None;
            }
        };
        match Credential::normalize(&raw) {
            Ok(credential) => Some(credential),
            Err(err) => {
                warn!(error = %err, "persisted credential is unusable; treating as anonymous");
                None
            }
        }
    }

    /// Normalizes and persists a raw token, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Rejects empty input; surfaces storage write failures.
    pub async fn set(&self, raw: &str) -> ApiResult<Credential> {
        let credential = Credential::normalize(raw)?;
        self.storage
            .store(credential.header_value())
            .await
            .map_err(ApiError::Storage)?;
        Ok(credential)
    }

    /// Removes the persisted credential.
    ///
    /// # Errors
    ///
    /// Surfaces storage write failures.
    pub async fn clear(&self) -> ApiResult<()> {
        self.storage.clear().await.map_err(ApiError::Storage)
    }

    /// Returns true when a credential is held.
    pub async fn is_authenticated(&self) -> bool {
        self.get().await.is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

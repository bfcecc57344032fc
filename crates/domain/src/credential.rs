//! Bearer credential with canonical prefix normalization.
//!
//! The backend accepts `Authorization: Bearer <token>`. Tokens arrive from
//! several sources (login payloads, previously persisted values, manual
//! entry) and may or may not already carry the prefix, in any case. This
//! type guarantees exactly one canonical `Bearer ` prefix no matter how
//! many times a value passes through normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// The canonical scheme prefix applied to every stored credential.
pub const BEARER_PREFIX: &str = "Bearer ";

/// A normalized bearer credential.
///
/// Always holds the full header value, `Bearer <token>`, with exactly one
/// prefix. Construct via [`Credential::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Normalizes a raw token into canonical prefixed form.
    ///
    /// Detects an existing `bearer ` prefix case-insensitively, strips it
    /// (repeatedly, so an accidentally double-prefixed value still comes
    /// out canonical), trims surrounding whitespace, and re-applies the
    /// canonical prefix once. Idempotent: normalizing an already-normalized
    /// value is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCredential`] if nothing remains after
    /// stripping prefixes and whitespace.
    pub fn normalize(raw: &str) -> DomainResult<Self> {
        let mut bare = raw.trim();
        loop {
            let lower = bare.to_ascii_lowercase();
            if let Some(rest) = lower.strip_prefix("bearer") {
                // Only treat it as a scheme prefix when followed by whitespace.
                if rest.starts_with(char::is_whitespace) {
                    bare = bare[6..].trim_start();
                    continue;
                }
            }
            break;
        }
        let bare = bare.trim_end();
        if bare.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(format!("{BEARER_PREFIX}{bare}")))
    }

    /// Returns the full `Bearer <token>` header value.
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.0
    }

    /// Returns the bare token without the scheme prefix.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0[BEARER_PREFIX.len()..]
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

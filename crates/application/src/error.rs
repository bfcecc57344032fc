//! The client's error taxonomy.
//!
//! The pipeline classifies every failed call into exactly one of these
//! variants and surfaces exactly one notification for it; store actions
//! re-raise the error to the caller after local cleanup, never suppressing
//! it. Nothing is retried automatically.

use thiserror::Error;

use agora_domain::DomainError;

use crate::ports::StorageError;

/// Errors produced by the request pipeline and the stores built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received: connectivity loss, DNS failure, or the
    /// per-call timeout expiring.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the call as unauthorized and no credential was
    /// held. Navigation to the login entry point has been requested.
    #[error("authentication required")]
    AuthRequired,

    /// The backend rejected the call as unauthorized while a credential was
    /// held. The credential has been cleared and navigation to the login
    /// entry point requested.
    #[error("session expired")]
    SessionExpired,

    /// The transport succeeded but the envelope carried a failure code.
    #[error("application error (code {code}): {message}")]
    Application {
        /// The envelope's status code.
        code: i32,
        /// The envelope's message.
        message: String,
    },

    /// The transport returned a non-2xx status outside the unauthorized
    /// class.
    #[error("request failed with status {status}: {message}")]
    Request {
        /// The HTTP status code.
        status: u16,
        /// Best available message: envelope message, else a generic fallback.
        message: String,
    },

    /// Login succeeded at the transport and envelope level but no usable
    /// token was found in any of the known response shapes.
    #[error("login response carried no usable token")]
    MalformedLoginResponse,

    /// A payload could not be encoded for sending or decoded from a
    /// successful response.
    #[error("decode error: {0}")]
    Decode(String),

    /// The durable credential store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A domain validation failed before any request was sent.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Returns true for the unauthorized classifications that force
    /// navigation to the login entry point.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::SessionExpired)
    }
}

/// Result type alias for pipeline and store operations.
pub type ApiResult<T> = Result<T, ApiError>;

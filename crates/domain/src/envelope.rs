//! The backend's uniform response envelope.

use serde::{Deserialize, Serialize};

/// Envelope code signalling a successful operation.
///
/// This is the sole success discriminator: a 2xx transport status with any
/// other code is still a domain-level failure.
pub const SUCCESS_CODE: i32 = 200;

/// Envelope code signalling a rejected or expired session.
pub const UNAUTHORIZED_CODE: i32 = 401;

/// The backend's response wrapper: `{ code, message, data }`.
///
/// `data` is absent (or `null`) for acknowledgement-only operations such as
/// logout or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Backend status code; [`SUCCESS_CODE`] on success.
    pub code: i32,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: String,
    /// The payload, when the operation produces one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Returns true if the envelope code signals success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Returns true if the envelope code signals a rejected session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.code == UNAUTHORIZED_CODE
    }
}

//! User account types.

use serde::{Deserialize, Serialize};

/// A user profile as returned by the backend.
///
/// `rating` and `sales_count` are server-derived; the client never computes
/// them locally, which is why profile updates re-fetch rather than merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name shown on listings.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Seller rating aggregated by the backend.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Completed sales, aggregated by the backend.
    #[serde(default)]
    pub sales_count: Option<u64>,
    /// Account creation timestamp, RFC 3339, passed through opaquely.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for the register operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired login name.
    pub username: String,
    /// Plaintext password, sent over TLS only.
    pub password: String,
    /// Contact email.
    pub email: String,
}

/// Payload for the login operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Payload for the update-profile operation. All fields optional; only
/// present fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// New contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

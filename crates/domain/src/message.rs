//! Conversation message types.

use serde::{Deserialize, Serialize};

/// A message as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Backend identifier.
    pub id: i64,
    /// Conversation this message belongs to.
    pub conversation_id: i64,
    /// Sending user's id.
    pub sender_id: i64,
    /// Receiving user's id.
    pub recipient_id: i64,
    /// Message body.
    pub content: String,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub read: bool,
    /// Send timestamp, RFC 3339, passed through opaquely.
    #[serde(default)]
    pub sent_at: Option<String>,
}

/// Payload for sending a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    /// Receiving user's id.
    pub recipient_id: i64,
    /// Product the conversation is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    /// Message body.
    pub content: String,
}

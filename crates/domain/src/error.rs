//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A credential was empty or contained only a prefix.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// A review rating was outside the accepted range.
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// The HTTP method is not supported by the catalog.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// An order status string could not be parsed.
    #[error("unknown order status: {0}")]
    UnknownOrderStatus(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

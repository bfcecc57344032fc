//! Review types.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A star rating, validated to 1..=5 at construction and deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRating`] outside 1..=5.
    pub const fn new(stars: u8) -> DomainResult<Self> {
        if stars >= 1 && stars <= 5 {
            Ok(Self(stars))
        } else {
            Err(DomainError::InvalidRating(stars))
        }
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(stars: u8) -> DomainResult<Self> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A review as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Backend identifier.
    pub id: i64,
    /// The reviewed order.
    pub order_id: i64,
    /// Reviewing user's id.
    pub reviewer_id: i64,
    /// Star rating.
    pub rating: Rating,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
    /// Creation timestamp, RFC 3339, passed through opaquely.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// The order being reviewed.
    pub order_id: i64,
    /// Star rating.
    pub rating: Rating,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
}

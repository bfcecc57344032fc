//! Product listing types.

use serde::{Deserialize, Serialize};

/// Lifecycle of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Visible in search, can be ordered.
    #[default]
    Available,
    /// An order exists but is not complete.
    Reserved,
    /// Sold and no longer purchasable.
    Sold,
    /// Taken down by the seller.
    Delisted,
}

/// A product listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier.
    pub id: i64,
    /// Seller's user id.
    pub seller_id: i64,
    /// Listing title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    /// Category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// Image URLs, first is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: ProductStatus,
    /// Creation timestamp, RFC 3339, passed through opaquely.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for publishing a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Listing title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    /// Category slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Payload for updating an existing product. Only present fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price in minor currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// New category slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Replacement image URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// New lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

/// Search and listing parameters, serialized into the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Full-text keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Restrict to one category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive lower price bound, minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    /// Inclusive upper price bound, minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    /// Result offset for paging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl ProductQuery {
    /// Creates a keyword-only query.
    #[must_use]
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }
}

//! Endpoint descriptor: verb, path, and auth requirement.

use crate::method::HttpMethod;

/// A single logical backend operation.
///
/// Immutable once built; the catalog in [`crate::catalog`] is the only
/// producer. Paths are relative to the API namespace prefix, which the
/// request pipeline prepends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// The HTTP verb.
    pub method: HttpMethod,
    /// Path relative to the API prefix, e.g. `/products/7`.
    pub path: String,
    /// Whether the operation is meaningful only with a credential.
    ///
    /// Advisory metadata for callers and route guards. The pipeline itself
    /// attaches the credential whenever one exists, regardless of this flag.
    pub requires_auth: bool,
}

impl Endpoint {
    /// Creates a GET endpoint.
    #[must_use]
    pub fn get(path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            requires_auth,
        }
    }

    /// Creates a POST endpoint.
    #[must_use]
    pub fn post(path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            requires_auth,
        }
    }

    /// Creates a PUT endpoint.
    #[must_use]
    pub fn put(path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            requires_auth,
        }
    }

    /// Creates a DELETE endpoint.
    #[must_use]
    pub fn delete(path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            requires_auth,
        }
    }
}

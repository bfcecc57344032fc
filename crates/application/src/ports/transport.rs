//! HTTP transport port.

use async_trait::async_trait;
use thiserror::Error;

use agora_domain::HttpMethod;

/// A fully prepared outbound request, ready for the wire.
///
/// The pipeline has already applied the API prefix and the credential
/// header by the time a transport sees one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP verb.
    pub method: HttpMethod,
    /// Absolute path including the API prefix, e.g. `/api/v1/products/7`.
    pub path: String,
    /// Already-encoded query string, without the leading `?`.
    pub query: Option<String>,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// JSON body for verbs that carry one.
    pub body: Option<serde_json::Value>,
}

impl TransportRequest {
    /// Returns the value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response as received from the wire, before any classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failures where no HTTP response was received at all.
///
/// Every variant classifies as a network error in the pipeline's taxonomy;
/// the split exists for logging and diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The per-call timeout expired.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The target URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other I/O failure before a response arrived.
    #[error("transport I/O error: {0}")]
    Io(String),
}

/// Port for the underlying HTTP transport.
///
/// Implementations send exactly one request per call and perform no
/// retries and no response interpretation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no response was received;
    /// non-2xx statuses are returned as ordinary responses.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

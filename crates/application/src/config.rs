//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default backend origin, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed API namespace prefix enforced on every outgoing path.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Per-call timeout; expiry surfaces as a network error.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the request pipeline and its transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The backend origin all requests target.
    pub base_url: Url,
    /// API namespace prefix prepended to relative paths.
    #[serde(default = "default_prefix")]
    pub api_prefix: String,
    /// Per-call timeout.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// User-Agent header value sent by the transport.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_user_agent() -> String {
    concat!("Agora/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    /// Creates a configuration for the given backend origin with defaults
    /// for everything else.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_prefix: default_prefix(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Overrides the API namespace prefix.
    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Overrides the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // DEFAULT_BASE_URL is a compile-time constant that always parses.
        #[allow(clippy::expect_used)]
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("valid constant URL"))
    }
}

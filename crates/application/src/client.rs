//! The request pipeline.
//!
//! [`ApiClient`] is the single choke point for all outbound calls. Each
//! call runs a fixed outgoing phase (API-prefix enforcement, credential
//! injection) and a fixed incoming phase (envelope unwrapping, error
//! classification, session-expiry redirection). The pipeline performs no
//! retries, no deduplication, and no caching; apart from reading the token
//! store it is stateless per call.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use agora_domain::{Endpoint, Envelope};

use crate::auth::TokenStore;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::ports::{HttpTransport, NavigationSignal, Notifier, TransportRequest};

/// Fallback shown when no more specific message is available.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Shown when no response was received at all.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error, please check that the backend service is reachable";

/// Shown when an authenticated call is rejected as unauthorized.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired, please log in again";

/// Shown when an anonymous call is rejected as unauthorized.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in first";

struct Inner {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStore,
    notifier: Arc<dyn Notifier>,
    navigation: Arc<dyn NavigationSignal>,
}

/// The request pipeline. Cheap to clone; all clones share one transport
/// and one token store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    /// Assembles the pipeline from its collaborators.
    #[must_use]
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: TokenStore,
        notifier: Arc<dyn Notifier>,
        navigation: Arc<dyn NavigationSignal>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                tokens,
                notifier,
                navigation,
            }),
        }
    }

    /// The token store shared with this pipeline.
    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.inner.tokens
    }

    /// The pipeline's configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Executes an operation with neither query nor body, returning the
    /// unwrapped `data` payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the classification of every failure mode.
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let raw = self.dispatch(endpoint, None, None).await?;
        self.unwrap_data(raw)
    }

    /// Executes a read with query parameters, returning the unwrapped
    /// `data` payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; additionally fails with [`ApiError::Decode`] if
    /// the query cannot be URL-encoded.
    pub async fn execute_with_query<Q, T>(&self, endpoint: Endpoint, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let encoded =
            serde_urlencoded::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
        let query = (!encoded.is_empty()).then_some(encoded);
        let raw = self.dispatch(endpoint, query, None).await?;
        self.unwrap_data(raw)
    }

    /// Executes a write with a JSON body, returning the unwrapped `data`
    /// payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; additionally fails with [`ApiError::Decode`] if
    /// the body cannot be serialized.
    pub async fn execute_with_body<B, T>(&self, endpoint: Endpoint, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = (!body.is_null()).then_some(body);
        let raw = self.dispatch(endpoint, None, body).await?;
        self.unwrap_data(raw)
    }

    /// Executes a write and returns the whole raw envelope instead of the
    /// unwrapped payload. The full incoming phase still runs, including the
    /// `code == 200` check.
    ///
    /// Exists for login-shaped responses whose token may live outside
    /// `data`; everything else should prefer the typed variants.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn execute_envelope<B>(&self, endpoint: Endpoint, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = (!body.is_null()).then_some(body);
        self.dispatch(endpoint, None, body).await
    }

    /// Runs both pipeline phases for one call. Returns the parsed envelope
    /// as raw JSON once it has passed classification.
    async fn dispatch(
        &self,
        endpoint: Endpoint,
        query: Option<String>,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let inner = &self.inner;

        // Outgoing phase: namespace prefix, then credential injection.
        let path = if endpoint.path.starts_with(&inner.config.api_prefix) {
            endpoint.path.clone()
        } else {
            format!("{}{}", inner.config.api_prefix, endpoint.path)
        };
        let credential = inner.tokens.get().await;
        let had_credential = credential.is_some();
        let mut headers = Vec::with_capacity(1);
        if let Some(credential) = credential {
            headers.push((
                "Authorization".to_string(),
                credential.header_value().to_string(),
            ));
        }

        debug!(method = %endpoint.method, %path, authenticated = had_credential, "dispatching request");

        let request = TransportRequest {
            method: endpoint.method,
            path,
            query,
            headers,
            body,
        };

        // Incoming phase, fixed order: transport failure, unauthorized
        // status, envelope classification, other statuses.
        let response = match inner.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "no response received");
                self.notify(NETWORK_FAILURE_MESSAGE);
                return Err(ApiError::Network(err.to_string()));
            }
        };

        if response.status == 401 {
            return Err(self.reject_unauthorized(had_credential).await);
        }

        if response.is_success() {
            let raw: Value = match serde_json::from_slice(&response.body) {
                Ok(raw) => raw,
                Err(err) => {
                    self.notify(GENERIC_FAILURE_MESSAGE);
                    return Err(ApiError::Decode(err.to_string()));
                }
            };
            let envelope: Envelope<Value> = match serde_json::from_value(raw.clone()) {
                Ok(envelope) => envelope,
                Err(err) => {
                    self.notify(GENERIC_FAILURE_MESSAGE);
                    return Err(ApiError::Decode(format!("malformed envelope: {err}")));
                }
            };
            if envelope.is_success() {
                return Ok(raw);
            }
            let message = if envelope.message.is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                envelope.message.clone()
            };
            warn!(code = envelope.code, %message, "envelope carried a failure code");
            self.notify(&message);
            if envelope.is_unauthorized() {
                inner.navigation.redirect_to_login(None);
            }
            return Err(ApiError::Application {
                code: envelope.code,
                message,
            });
        }

        // Other non-2xx: best message available, envelope first.
        let message = serde_json::from_slice::<Envelope<Value>>(&response.body)
            .ok()
            .filter(|envelope| !envelope.message.is_empty())
            .map_or_else(|| GENERIC_FAILURE_MESSAGE.to_string(), |envelope| envelope.message);
        warn!(status = response.status, %message, "request rejected");
        self.notify(&message);
        Err(ApiError::Request {
            status: response.status,
            message,
        })
    }

    /// Classifies an unauthorized transport status. A held credential means
    /// the session expired and the credential is cleared; otherwise the
    /// call simply required login. Both redirect to the login entry point.
    async fn reject_unauthorized(&self, had_credential: bool) -> ApiError {
        if had_credential {
            if let Err(err) = self.inner.tokens.clear().await {
                warn!(error = %err, "failed to clear credential after session expiry");
            }
            self.notify(SESSION_EXPIRED_MESSAGE);
            self.inner.navigation.redirect_to_login(None);
            ApiError::SessionExpired
        } else {
            self.notify(LOGIN_REQUIRED_MESSAGE);
            self.inner.navigation.redirect_to_login(None);
            ApiError::AuthRequired
        }
    }

    /// Pulls `data` out of a classified envelope and deserializes it into
    /// the caller's type. A missing or null `data` deserializes cleanly
    /// into `Option` and `Value` targets.
    fn unwrap_data<T: DeserializeOwned>(&self, raw: Value) -> ApiResult<T> {
        let data = raw.get("data").cloned().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|err| {
            self.notify(GENERIC_FAILURE_MESSAGE);
            ApiError::Decode(format!("unexpected payload shape: {err}"))
        })
    }

    pub(crate) fn notify(&self, message: &str) {
        self.inner.notifier.notify(message);
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

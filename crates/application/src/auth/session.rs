//! The authentication domain store.
//!
//! Wraps the user endpoints and owns the session-scoped state: the
//! credential (through [`TokenStore`]) and the last-fetched profile.

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use agora_domain::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile, catalog};

use crate::auth::TokenStore;
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

/// Shown when a login response carries no usable token.
pub const MALFORMED_LOGIN_MESSAGE: &str = "Login failed: unexpected response from the server";

/// One way a login-shaped response might carry its token.
type TokenStrategy = fn(&Value) -> Option<&str>;

/// Ordered extraction strategies for the token in a login response.
///
/// A compatibility shim, not a general contract: backend versions have
/// placed the token in each of these spots. Tried in fixed priority order;
/// first match wins.
const TOKEN_STRATEGIES: &[(&str, TokenStrategy)] = &[
    ("data is the token string", |envelope| {
        envelope.get("data")?.as_str()
    }),
    ("token field on data", |envelope| {
        envelope.get("data")?.get("token")?.as_str()
    }),
    ("token field on the envelope root", |envelope| {
        envelope.get("token")?.as_str()
    }),
];

fn extract_token(envelope: &Value) -> Option<(&'static str, &str)> {
    TOKEN_STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(envelope).map(|token| (*name, token)))
}

/// The authentication store: login/logout lifecycle plus the cached
/// profile. One instance per application root, like the entity stores.
pub struct SessionStore {
    client: ApiClient,
    profile: RwLock<Option<UserProfile>>,
}

impl SessionStore {
    /// Creates the store over a shared pipeline.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            profile: RwLock::new(None),
        }
    }

    /// The token store backing this session.
    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        self.client.tokens()
    }

    /// True when a credential is held. This is the signal route guards
    /// consume; it says nothing about whether the server still accepts
    /// the credential.
    pub async fn is_authenticated(&self) -> bool {
        self.client.tokens().is_authenticated().await
    }

    /// The last-fetched profile, if any.
    pub async fn user_info(&self) -> Option<UserProfile> {
        self.profile.read().await.clone()
    }

    /// Registers a new account. Does not log in.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Option<UserProfile>> {
        self.client
            .execute_with_body(catalog::user::register(), request)
            .await
    }

    /// Logs in: exchanges credentials for a token, persists it, then
    /// immediately fetches the profile so `user_info` is populated before
    /// this returns.
    ///
    /// # Errors
    ///
    /// [`ApiError::MalformedLoginResponse`] if no strategy finds a token;
    /// in that case the token store is never touched. Otherwise propagates
    /// any pipeline or storage rejection.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<UserProfile> {
        let envelope = self
            .client
            .execute_envelope(catalog::user::login(), request)
            .await?;

        let Some((strategy, token)) = extract_token(&envelope) else {
            warn!("login response carried no usable token");
            self.client.notify(MALFORMED_LOGIN_MESSAGE);
            return Err(ApiError::MalformedLoginResponse);
        };
        debug!(strategy, "token extracted from login response");

        self.client.tokens().set(token).await?;
        self.fetch_profile().await
    }

    /// Fetches the profile and overwrites the cached copy.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the cached profile is untouched
    /// on failure.
    pub async fn fetch_profile(&self) -> ApiResult<UserProfile> {
        let profile: UserProfile = self.client.execute(catalog::user::profile()).await?;
        *self.profile.write().await = Some(profile.clone());
        Ok(profile)
    }

    /// Updates the profile, then re-fetches it so server-derived fields
    /// (rating, sales count) land in the cache. Returns the re-fetched
    /// profile.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<UserProfile> {
        let _: Value = self
            .client
            .execute_with_body(catalog::user::update_profile(), request)
            .await?;
        self.fetch_profile().await
    }

    /// Obtains a fresh token for the current session and replaces the
    /// stored credential.
    ///
    /// # Errors
    ///
    /// [`ApiError::MalformedLoginResponse`] if the refresh response carries
    /// no usable token; otherwise propagates any pipeline or storage
    /// rejection.
    pub async fn refresh_token(&self) -> ApiResult<()> {
        let envelope = self
            .client
            .execute_envelope(catalog::user::refresh_token(), &())
            .await?;
        let Some((strategy, token)) = extract_token(&envelope) else {
            warn!("refresh response carried no usable token");
            self.client.notify(MALFORMED_LOGIN_MESSAGE);
            return Err(ApiError::MalformedLoginResponse);
        };
        debug!(strategy, "token extracted from refresh response");
        self.client.tokens().set(token).await?;
        Ok(())
    }

    /// Logs out. Local session state (credential and cached profile) is
    /// cleared unconditionally: a failed server call must not leave the
    /// client looking authenticated. The server error, if any, is still
    /// propagated after the local clear.
    ///
    /// # Errors
    ///
    /// Propagates the logout call's rejection, or a storage failure while
    /// clearing the credential.
    pub async fn logout(&self) -> ApiResult<()> {
        let result: ApiResult<Value> = self.client.execute(catalog::user::logout()).await;

        *self.profile.write().await = None;
        let cleared = self.client.tokens().clear().await;

        result?;
        cleared
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

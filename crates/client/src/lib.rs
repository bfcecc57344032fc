//! Agora - data-access client for the marketplace backend
//!
//! The [`Marketplace`] type is the application root: constructed once, it
//! owns the single request pipeline and exactly one store per entity
//! domain, all sharing that pipeline and its token store. Hosts keep one
//! instance for the life of the application session and hand out
//! references to it; there is no ambient global state.
//!
//! ```no_run
//! use agora::{ClientConfig, Marketplace, ProductQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let market = Marketplace::connect(ClientConfig::default())?;
//! let page = market.products.search(&ProductQuery::keyword("bike")).await?;
//! println!("{} of {} results", page.content.len(), page.total);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use thiserror::Error;

use agora_application::ports::{
    CredentialStorage, HttpTransport, NavigationSignal, Notifier, StorageError, TransportError,
};
use agora_application::{
    ApiClient, MessageStore, OrderStore, ProductStore, ReviewStore, SessionStore, TokenStore,
};
use agora_infrastructure::{
    FileCredentialStorage, NoopNavigation, ReqwestTransport, TracingNotifier,
};

pub use agora_application::{ApiError, ApiResult, ClientConfig, EntityState, EntityStore};
pub use agora_domain::{
    Credential, LoginRequest, Message, NewMessage, NewOrder, NewProduct, NewReview, Order,
    OrderStatus, Page, Product, ProductQuery, ProductStatus, ProductUpdate, Rating,
    RegisterRequest, Review, UpdateProfileRequest, UserProfile,
};

/// Failures while assembling the default client.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The HTTP transport could not be constructed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Durable credential storage is not available.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The application root: one pipeline, one store per domain.
pub struct Marketplace {
    client: ApiClient,
    /// Authentication lifecycle and the cached profile.
    pub session: SessionStore,
    /// Product search, details, and the caller's own listings.
    pub products: ProductStore,
    /// Order placement and tracking.
    pub orders: OrderStore,
    /// Conversations.
    pub messages: MessageStore,
    /// Reviews.
    pub reviews: ReviewStore,
}

impl Marketplace {
    /// Assembles the root from explicit ports. The composition seam for
    /// hosts that bring their own transport, storage, or UI collaborators.
    #[must_use]
    pub fn with_ports(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn CredentialStorage>,
        notifier: Arc<dyn Notifier>,
        navigation: Arc<dyn NavigationSignal>,
    ) -> Self {
        let tokens = TokenStore::new(storage);
        let client = ApiClient::new(config, transport, tokens, notifier, navigation);
        Self::from_client(client)
    }

    /// Builds every domain store over an already-assembled pipeline.
    #[must_use]
    pub fn from_client(client: ApiClient) -> Self {
        Self {
            session: SessionStore::new(client.clone()),
            products: ProductStore::new(client.clone()),
            orders: OrderStore::new(client.clone()),
            messages: MessageStore::new(client.clone()),
            reviews: ReviewStore::new(client.clone()),
            client,
        }
    }

    /// Assembles the root with the default adapters: reqwest transport,
    /// file-backed credential storage at the platform location, and
    /// tracing-based notifier/navigation for headless use.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if the transport cannot be built or the
    /// platform exposes no configuration directory.
    pub fn connect(config: ClientConfig) -> Result<Self, SetupError> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        let storage = Arc::new(FileCredentialStorage::default_location()?);
        Ok(Self::with_ports(
            config,
            transport,
            storage,
            Arc::new(TracingNotifier),
            Arc::new(NoopNavigation),
        ))
    }

    /// The shared request pipeline.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// True when a credential is held; the signal route guards consume.
    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }
}

impl std::fmt::Debug for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Marketplace")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

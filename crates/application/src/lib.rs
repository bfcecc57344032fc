//! Agora Application - Request pipeline and entity stores
//!
//! This crate carries the two core subsystems of the client:
//!
//! - the **request pipeline** ([`ApiClient`]): one choke point for all
//!   outbound calls, enforcing the API namespace prefix, bearer-credential
//!   injection, envelope unwrapping, and a uniform error taxonomy;
//! - the **entity store layer** ([`store`]): per-domain state containers
//!   that cache the current/list views of each resource and mutate local
//!   state only from confirmed server responses.
//!
//! External collaborators (transport, credential storage, notifications,
//! navigation) are reached through the ports in [`ports`]; the
//! infrastructure crate provides the default adapters.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod ports;
pub mod store;

pub use auth::{SessionStore, TokenStore};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use ports::{
    CredentialStorage, HttpTransport, NavigationSignal, Notifier, StorageError, TransportError,
    TransportRequest, TransportResponse,
};
pub use store::{EntityState, EntityStore, MessageStore, OrderStore, ProductStore, ReviewStore};

//! Agora Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest transport, durable credential
//! storage, and default notifier/navigation adapters for headless use.

pub mod adapters;
pub mod persistence;

pub use adapters::{NoopNavigation, ReqwestTransport, TracingNotifier};
pub use persistence::{FileCredentialStorage, MemoryCredentialStorage};

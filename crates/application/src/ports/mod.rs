//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the pipeline/store core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure crate, or by a mock in tests.

mod credential_storage;
mod navigation;
mod notifier;
mod transport;

pub use credential_storage::{CredentialStorage, StorageError};
pub use navigation::NavigationSignal;
pub use notifier::Notifier;
pub use transport::{HttpTransport, TransportError, TransportRequest, TransportResponse};

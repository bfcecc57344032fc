//! The entity store layer.
//!
//! One store per domain, each owning its [`EntityState`] and wrapping
//! pipeline calls. Stores mutate cached state only from confirmed server
//! responses, never optimistically, and re-raise every pipeline error
//! to the caller after local cleanup.
//!
//! The application root constructs exactly one store per domain and owns
//! their lifecycle; all stores share one [`crate::ApiClient`].

mod entity;
mod message;
mod order;
mod product;
mod review;

pub use entity::{EntityState, EntityStore};
pub use message::MessageStore;
pub use order::OrderStore;
pub use product::ProductStore;
pub use review::ReviewStore;

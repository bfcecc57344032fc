//! Agora Domain - Core marketplace types
//!
//! This crate defines the domain model for the Agora marketplace client.
//! All types here are pure Rust with no I/O dependencies.

pub mod catalog;
pub mod credential;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod message;
pub mod method;
pub mod order;
pub mod page;
pub mod product;
pub mod review;
pub mod user;

pub use credential::Credential;
pub use endpoint::Endpoint;
pub use envelope::{Envelope, SUCCESS_CODE, UNAUTHORIZED_CODE};
pub use error::{DomainError, DomainResult};
pub use message::{Message, NewMessage};
pub use method::HttpMethod;
pub use order::{NewOrder, Order, OrderStatus, OrderStatusUpdate};
pub use page::Page;
pub use product::{NewProduct, Product, ProductQuery, ProductStatus, ProductUpdate};
pub use review::{NewReview, Rating, Review};
pub use user::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile};

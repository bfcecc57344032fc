//! Credential handling and the authenticated session.

mod session;
mod token_store;

pub use session::SessionStore;
pub use token_store::TokenStore;

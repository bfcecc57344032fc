//! Credential storage adapters.

mod credential_file;
mod memory;

pub use credential_file::FileCredentialStorage;
pub use memory::MemoryCredentialStorage;

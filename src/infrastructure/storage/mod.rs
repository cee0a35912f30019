pub mod secure_storage;
pub mod token_store;

pub use secure_storage::{InMemorySecureStorage, KeyringStorage, SecureStorage};
pub use token_store::TokenStore;

//! Sled Persistence - 持久化令牌存储

mod credential_store;

pub use credential_store::{SledCredentialStore, SledStoreConfig};

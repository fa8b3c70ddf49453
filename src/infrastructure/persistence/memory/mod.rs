//! Memory Persistence - 进程内令牌存储

mod credential_store;

pub use credential_store::InMemoryCredentialStore;

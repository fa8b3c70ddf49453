//! Persistence Layer - 令牌持久化
//!
//! 内存与 Sled 两种存储实现

pub mod memory;
pub mod sled;

use std::sync::Arc;

use crate::application::ports::{CredentialStorePort, StorageError};
use crate::config::{StorageBackend, StorageConfig};

pub use self::memory::InMemoryCredentialStore;
pub use self::sled::{SledCredentialStore, SledStoreConfig};

/// 按配置打开令牌存储
pub fn open_credential_store(
    config: &StorageConfig,
) -> Result<Arc<dyn CredentialStorePort>, StorageError> {
    match config.backend {
        StorageBackend::Memory => Ok(InMemoryCredentialStore::new().arc()),
        StorageBackend::Sled => {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
            }
            Ok(SledCredentialStore::open(&config.path)?.arc())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::ACCESS_TOKEN_KEY;
    use tempfile::tempdir;

    #[test]
    fn test_open_memory_store() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            path: Default::default(),
        };
        let store = open_credential_store(&config).unwrap();
        store.set(ACCESS_TOKEN_KEY, "a").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn test_open_sled_store_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::Sled,
            path: dir.path().join("nested/credentials.sled"),
        };
        let store = open_credential_store(&config).unwrap();
        store.set(ACCESS_TOKEN_KEY, "a").unwrap();
        assert!(dir.path().join("nested").exists());
    }
}

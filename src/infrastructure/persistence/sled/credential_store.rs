//! Sled-based Credential Store Implementation
//!
//! 每个键存储为 `credential:{key}`，值为 bincode 编码的条目；写入后立即 flush

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{CredentialStorePort, StorageError};

const KEY_PREFIX: &str = "credential:";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/credentials.sled".to_string(),
        }
    }
}

/// 内部存储条目
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    updated_at: i64,
}

/// Sled 令牌存储
pub struct SledCredentialStore {
    db: Db,
}

impl SledCredentialStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, StorageError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            entries = db.scan_prefix(KEY_PREFIX).count(),
            "SledCredentialStore initialized"
        );

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 条目最后写入时间（Unix 秒）
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>, StorageError> {
        Ok(self.read_entry(key)?.map(|entry| entry.updated_at))
    }

    fn read_entry(&self, key: &str) -> Result<Option<StoredEntry>, StorageError> {
        match self.db.get(storage_key(key)) {
            Ok(Some(data)) => {
                let entry: StoredEntry = bincode::deserialize(&data)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(entry))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::DatabaseError(e.to_string())),
        }
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db
            .flush()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

fn storage_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

impl CredentialStorePort for SledCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entry(key)?.map(|entry| entry.value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entry = StoredEntry {
            value: value.to_string(),
            updated_at: Utc::now().timestamp(),
        };
        let entry_bytes = bincode::serialize(&entry)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        self.db
            .insert(storage_key(key), entry_bytes)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        self.flush()?;

        tracing::debug!(key = %key, "Credential stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let removed = self
            .db
            .remove(storage_key(key))
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        if removed.is_some() {
            self.flush()?;
            tracing::debug!(key = %key, "Credential removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_store_set_get_remove() {
        let dir = tempdir().unwrap();
        let store = SledCredentialStore::open(dir.path().join("test.sled")).unwrap();

        store.set(ACCESS_TOKEN_KEY, "a1").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a1"));
        assert!(store.updated_at(ACCESS_TOKEN_KEY).unwrap().is_some());

        store.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(store.updated_at(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_tokens_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");

        {
            let store = SledCredentialStore::open(&path).unwrap();
            store.set(ACCESS_TOKEN_KEY, "a1").unwrap();
            store.set(REFRESH_TOKEN_KEY, "r1").unwrap();
        }

        let store = SledCredentialStore::open(&path).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a1"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("r1"));

        store.clear_tokens().unwrap();
        assert_eq!(store.access_token().unwrap(), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY).unwrap(), None);
    }
}

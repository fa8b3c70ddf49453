//! Credential Store Port - 令牌存储抽象
//!
//! 同步的键值存储，一个键对应一个值；具体实现在 infrastructure/persistence 层

use thiserror::Error;

use crate::domain::auth::{Credential, TokenPair, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Credential Store Port
pub trait CredentialStorePort: Send + Sync {
    /// 读取键值
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 写入键值（覆盖）
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 删除键值，键不存在时不报错
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// 当前访问令牌（空值视为无令牌）
    fn access_token(&self) -> Result<Option<Credential>, StorageError> {
        Ok(self.get(ACCESS_TOKEN_KEY)?.and_then(Credential::new))
    }

    /// 整体写入令牌对；未携带刷新令牌时删除旧的刷新令牌
    fn store_tokens(&self, tokens: &TokenPair) -> Result<(), StorageError> {
        self.set(ACCESS_TOKEN_KEY, tokens.access.as_str())?;
        match &tokens.refresh {
            Some(refresh) => self.set(REFRESH_TOKEN_KEY, refresh.as_str()),
            None => self.remove(REFRESH_TOKEN_KEY),
        }
    }

    /// 删除两个令牌；两个键都会尝试删除，返回第一个错误
    fn clear_tokens(&self) -> Result<(), StorageError> {
        let access = self.remove(ACCESS_TOKEN_KEY);
        let refresh = self.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }
}

//! Auth Context - 令牌值对象

use std::fmt;

/// 访问令牌存储键
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// 刷新令牌存储键
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Bearer 令牌
///
/// 内容不透明；空字符串不构成有效令牌
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` 头部值
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// 令牌对（登录 / 刷新后整体覆盖写入）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: Credential,
    pub refresh: Option<Credential>,
}

impl TokenPair {
    pub fn new(access: Credential, refresh: Option<Credential>) -> Self {
        Self { access, refresh }
    }
}

//! Auth Context - 请求体与用户信息

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Credential, TokenPair};

/// 登录请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// 用户名 / 手机号 / 邮箱
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// 注册请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// 刷新令牌请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
        }
    }
}

/// 用户信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// 用户状态（服务端枚举，原样保留）
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub last_login_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// 访问令牌
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 令牌过期时间（秒）
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl UserVo {
    /// 登录 / 刷新响应中携带的令牌对
    pub fn token_pair(&self) -> Option<TokenPair> {
        let access = self.token.clone().and_then(Credential::new)?;
        let refresh = self.refresh_token.clone().and_then(Credential::new);
        Some(TokenPair::new(access, refresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_request_is_camel_case() {
        let body = serde_json::to_value(RefreshTokenRequest::new("r1")).unwrap();
        assert_eq!(body, json!({ "refreshToken": "r1" }));
    }

    #[test]
    fn test_register_request_skips_missing_contacts() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            phone: None,
            email: Some("a@example.com".to_string()),
        };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({ "username": "alice", "password": "secret1", "email": "a@example.com" })
        );
    }

    #[test]
    fn test_token_pair_from_user() {
        let user: UserVo = serde_json::from_value(json!({
            "id": 7,
            "username": "alice",
            "token": "t1",
            "refreshToken": "r1",
            "expiresIn": 7200
        }))
        .unwrap();

        let pair = user.token_pair().unwrap();
        assert_eq!(pair.access.as_str(), "t1");
        assert_eq!(pair.refresh.unwrap().as_str(), "r1");
    }

    #[test]
    fn test_no_token_pair_without_access_token() {
        let user = UserVo {
            refresh_token: Some("r1".to_string()),
            ..Default::default()
        };
        assert!(user.token_pair().is_none());
    }
}

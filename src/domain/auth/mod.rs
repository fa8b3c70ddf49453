//! Auth Context - 认证限界上下文
//!
//! 职责:
//! - 令牌值对象与存储键
//! - 登录 / 注册 / 刷新请求体
//! - 用户信息

mod credential;
mod models;

pub use credential::{Credential, TokenPair, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
pub use models::{LoginRequest, RefreshTokenRequest, RegisterRequest, UserVo};

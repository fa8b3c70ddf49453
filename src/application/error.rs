//! 应用层错误定义
//!
//! 网关与接口绑定统一返回的错误类型

use thiserror::Error;

use crate::application::ports::{StorageError, TransportError};
use crate::domain::request::QueryError;

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401：令牌已清除，已安排跳转登录页
    #[error("Unauthorized")]
    Unauthorized,

    /// 其他非 200 状态码
    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// 未收到响应（网络错误或超时）
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 发送前读取令牌失败
    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),

    /// 查询参数无法序列化
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    /// 请求体无法序列化
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// 200 响应体与期望类型不符
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// 对应的 HTTP 状态码（仅服务端响应类错误有）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::request_failed(500, "boom").status(), Some(500));
        let err: ApiError = TransportError::Timeout(Duration::from_secs(10)).into();
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display_carries_server_message() {
        let err = ApiError::request_failed(400, "用户名不能为空");
        assert_eq!(err.to_string(), "Request failed (400): 用户名不能为空");
    }
}

//! HTTP Transport Port - 底层 HTTP 传输抽象
//!
//! 只负责一次请求/响应交换，不理解业务状态码

use async_trait::async_trait;
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// 传输错误（未收到任何响应）
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// 传输请求
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    /// 完整 URL（base_url + path）
    pub url: String,
    /// 小写头部名称 -> 值
    pub headers: BTreeMap<String, String>,
    pub body: Value,
    pub timeout: Duration,
}

impl TransportRequest {
    /// 按名称查找头部（不区分大小写）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// 传输响应
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// 解码后的响应体；非 JSON 内容以字符串保存，空响应为 null
    pub body: Value,
}

impl TransportResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// HTTP Transport Port
#[async_trait]
pub trait HttpTransportPort: Send + Sync {
    /// 执行一次 HTTP 交换
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

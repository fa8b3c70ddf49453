//! Reqwest Transport - 基于 reqwest 的 HTTP 传输
//!
//! 实现 HttpTransportPort：
//! - 每个请求使用 `TransportRequest::timeout`
//! - GET / HEAD 不发送请求体，其余方法发送 JSON 请求体
//! - 响应体按 JSON 解码，失败时保留为字符串

use async_trait::async_trait;
use http::Method;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{
    HttpTransportPort, TransportError, TransportRequest, TransportResponse,
};
use crate::config::ApiConfig;

/// Reqwest 传输配置
#[derive(Debug, Clone)]
pub struct ReqwestTransportConfig {
    /// 客户端级超时（秒），作为单请求超时的上限
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ReqwestTransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("lingli-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ReqwestTransportConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl From<&ApiConfig> for ReqwestTransportConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::default().with_timeout(config.timeout_secs)
    }
}

/// Reqwest 传输
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// 创建新的传输实例
    pub fn new(config: ReqwestTransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TransportError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    /// 使用默认配置创建
    pub fn with_default_config() -> Result<Self, TransportError> {
        Self::new(ReqwestTransportConfig::default())
    }
}

fn sends_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD)
}

/// 解码响应体：空 -> null，合法 JSON -> JSON，其他 -> 字符串
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let timeout = request.timeout;
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str())
            .timeout(timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if sends_body(&request.method) {
            let body = serde_json::to_vec(&request.body)
                .map_err(|e| TransportError::NetworkError(format!("Invalid body: {}", e)))?;
            builder = builder.body(body);
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending HTTP request");

        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout(timeout)
            } else if e.is_connect() {
                TransportError::NetworkError(format!("Cannot connect to server: {}", e))
            } else {
                TransportError::NetworkError(e.to_string())
            }
        };

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(classify)?;

        tracing::debug!(status = status, body_size = bytes.len(), "HTTP response received");

        Ok(TransportResponse::new(status, decode_body(&bytes)))
    }
}

//! Scripted Transport - 按脚本返回响应的传输
//!
//! 按入队顺序逐个返回预设结果，并记录收到的所有请求；用于测试和离线演示

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::application::ports::{
    HttpTransportPort, TransportError, TransportRequest, TransportResponse,
};

/// 预设结果
#[derive(Debug, Clone)]
pub struct ScriptedReply {
    delay: Option<Duration>,
    outcome: Result<TransportResponse, TransportError>,
}

impl ScriptedReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            delay: None,
            outcome: Ok(TransportResponse::new(status, body)),
        }
    }

    pub fn error(error: TransportError) -> Self {
        Self {
            delay: None,
            outcome: Err(error),
        }
    }

    /// 返回前等待
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// 脚本化传输
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn push(&self, reply: ScriptedReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// 已收到的请求（按到达顺序）
    pub async fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().await.last().cloned()
    }

    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl HttpTransportPort for ScriptedTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "ScriptedTransport: request");
        self.requests.lock().await.push(request);

        let reply = self.replies.lock().await.pop_front();
        let Some(reply) = reply else {
            return Err(TransportError::NetworkError(
                "no scripted reply left".to_string(),
            ));
        };

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }
        reply.outcome
    }
}

//! Request Gateway - 所有出站 HTTP 调用的唯一入口
//!
//! 每次调用执行一次 HTTP 交换，并统一处理:
//! - 注入 Bearer 令牌
//! - 加载提示的显示 / 隐藏
//! - 状态码分支（200 / 401 / 其他）与失败提示
//!
//! 单次调用状态: `Pending → {Success, Unauthorized, Failed, TransportError}`，
//! 均为终态，不重试。

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::error::ApiError;
use crate::application::ports::{
    CredentialStorePort, HttpTransportPort, LoadingIndicatorPort, NavigatorPort, NotifierPort,
    TransportError, TransportRequest, TransportResponse,
};
use crate::config::AppConfig;
use crate::domain::request::RequestDescriptor;

/// 网关配置
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// 小写头部名称 -> 值
    pub default_headers: BTreeMap<String, String>,
    pub loading_title: String,
    pub session_expired_message: String,
    pub request_failed_message: String,
    pub network_error_message: String,
    pub login_page: String,
    pub redirect_delay: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

impl GatewayConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            timeout: config.api.timeout(),
            default_headers: config
                .api
                .headers
                .iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value.clone()))
                .collect(),
            loading_title: config.ui.loading_title.clone(),
            session_expired_message: config.ui.session_expired_message.clone(),
            request_failed_message: config.ui.request_failed_message.clone(),
            network_error_message: config.ui.network_error_message.clone(),
            login_page: config.ui.login_page.clone(),
            redirect_delay: Duration::from_millis(config.ui.redirect_delay_ms),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}

/// 网关依赖的界面能力
#[derive(Clone)]
pub struct UiPorts {
    pub loading: Arc<dyn LoadingIndicatorPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub navigator: Arc<dyn NavigatorPort>,
}

impl UiPorts {
    /// 同一个宿主同时提供三种能力
    pub fn from_shared<U>(ui: Arc<U>) -> Self
    where
        U: LoadingIndicatorPort + NotifierPort + NavigatorPort + 'static,
    {
        Self {
            loading: ui.clone(),
            notifier: ui.clone(),
            navigator: ui,
        }
    }

    pub fn with_loading(mut self, loading: Arc<dyn LoadingIndicatorPort>) -> Self {
        self.loading = loading;
        self
    }
}

/// 加载提示守卫；离开作用域时隐藏（包括 future 被丢弃的情况）
struct LoadingGuard {
    indicator: Arc<dyn LoadingIndicatorPort>,
}

impl LoadingGuard {
    fn show(indicator: &Arc<dyn LoadingIndicatorPort>, title: &str) -> Self {
        indicator.show(title, true);
        Self {
            indicator: indicator.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// 请求网关
pub struct RequestGateway {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransportPort>,
    credentials: Arc<dyn CredentialStorePort>,
    ui: UiPorts,
    /// 已安排但可能尚未执行的登录页跳转
    redirects: Mutex<Vec<JoinHandle<()>>>,
}

impl RequestGateway {
    pub fn new(
        config: GatewayConfig,
        transport: Arc<dyn HttpTransportPort>,
        credentials: Arc<dyn CredentialStorePort>,
        ui: UiPorts,
    ) -> Self {
        Self {
            config,
            transport,
            credentials,
            ui,
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStorePort> {
        &self.credentials
    }

    /// 等待已安排的登录页跳转执行完毕（进程退出前调用）
    pub async fn wait_for_redirects(&self) {
        let pending = std::mem::take(&mut *self.lock_redirects());
        for handle in pending {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Redirect task failed");
            }
        }
    }

    fn lock_redirects(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.redirects.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 发送请求，200 时返回解码后的响应体
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let span = tracing::debug_span!(
            "gateway_request",
            request_id = %Uuid::new_v4(),
            method = %descriptor.method(),
            path = %descriptor.path()
        );
        self.dispatch(descriptor).instrument(span).await
    }

    /// 发送请求并把响应体解码为 `T`
    ///
    /// 200 响应体与 `T` 不符时按失败处理：提示通用失败文案并返回 `ApiError::Decode`。
    /// 需要原样响应体时使用 [`RequestGateway::send`]。
    pub async fn send_as<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let body = self.send(descriptor).await?;
        serde_json::from_value(body).map_err(|e| {
            tracing::warn!(error = %e, "Response body does not match expected type");
            self.ui.notifier.toast(&self.config.request_failed_message);
            ApiError::Decode(e.to_string())
        })
    }

    async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let parts = descriptor.into_parts();

        let mut headers = self.config.default_headers.clone();
        headers.extend(parts.headers);
        if let Some(credential) = self.credentials.access_token()? {
            headers.insert("authorization".to_string(), credential.bearer());
        }

        let request = TransportRequest {
            method: parts.method,
            url: format!("{}{}", self.config.base_url, parts.path),
            headers,
            body: parts.body,
            timeout: self.config.timeout,
        };

        let guard = parts
            .loading
            .then(|| LoadingGuard::show(&self.ui.loading, &self.config.loading_title));

        let outcome = match tokio::time::timeout(self.config.timeout, self.transport.execute(request))
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(TransportError::Timeout(self.config.timeout)),
        };

        drop(guard);

        match outcome {
            Ok(response) => self.handle_response(response),
            Err(err) => {
                tracing::warn!(error = %err, "Transport failure");
                self.ui.notifier.toast(&self.config.network_error_message);
                Err(ApiError::Transport(err))
            }
        }
    }

    fn handle_response(&self, response: TransportResponse) -> Result<Value, ApiError> {
        match response.status {
            200 => {
                tracing::debug!(status = 200, "Request succeeded");
                Ok(response.body)
            }
            401 => {
                tracing::warn!(status = 401, "Session expired, clearing credentials");
                self.expire_session();
                Err(ApiError::Unauthorized)
            }
            status => {
                let message = server_message(&response.body)
                    .unwrap_or(&self.config.request_failed_message)
                    .to_string();
                tracing::warn!(status = status, message = %message, "Request failed");
                self.ui.notifier.toast(&message);
                Err(ApiError::RequestFailed { status, message })
            }
        }
    }

    /// 清除令牌、提示并延迟跳转登录页
    fn expire_session(&self) {
        if let Err(e) = self.credentials.clear_tokens() {
            tracing::warn!(error = %e, "Failed to clear credentials");
        }

        self.ui.notifier.toast(&self.config.session_expired_message);

        let navigator = self.ui.navigator.clone();
        let login_page = self.config.login_page.clone();
        let delay = self.config.redirect_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(page = %login_page, "Redirecting to login page");
            navigator.navigate_to(&login_page);
        });

        let mut redirects = self.lock_redirects();
        redirects.retain(|pending| !pending.is_finished());
        redirects.push(handle);
    }
}

/// 响应体中的非空 `message` 字段
fn server_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}

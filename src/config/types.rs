//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 后端 API 配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 界面提示配置
    #[serde(default)]
    pub ui: UiConfig,

    /// 令牌存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 后端 API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 基础 URL（开发环境）
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 每个请求都携带的默认头部
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    "http://localhost:8081/api/v1".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            headers: default_headers(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 界面提示配置
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// 加载提示标题
    #[serde(default = "default_loading_title")]
    pub loading_title: String,

    /// 401 时的提示
    #[serde(default = "default_session_expired_message")]
    pub session_expired_message: String,

    /// 服务端未返回 message 时的提示
    #[serde(default = "default_request_failed_message")]
    pub request_failed_message: String,

    /// 网络失败提示
    #[serde(default = "default_network_error_message")]
    pub network_error_message: String,

    /// 登录页路径
    #[serde(default = "default_login_page")]
    pub login_page: String,

    /// 401 提示后跳转登录页前的等待时间（毫秒）
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_loading_title() -> String {
    "加载中...".to_string()
}

fn default_session_expired_message() -> String {
    "登录已过期".to_string()
}

fn default_request_failed_message() -> String {
    "请求失败".to_string()
}

fn default_network_error_message() -> String {
    "网络请求失败".to_string()
}

fn default_login_page() -> String {
    "/pages/auth/login".to_string()
}

fn default_redirect_delay() -> u64 {
    1500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loading_title: default_loading_title(),
            session_expired_message: default_session_expired_message(),
            request_failed_message: default_request_failed_message(),
            network_error_message: default_network_error_message(),
            login_page: default_login_page(),
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

/// 令牌存储后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 进程内存（重启即丢失）
    Memory,
    /// Sled 嵌入式数据库
    #[default]
    Sled,
}

/// 令牌存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Sled 数据库路径
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/credentials.sled")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8081/api/v1");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.api.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(config.ui.login_page, "/pages/auth/login");
        assert_eq!(config.ui.redirect_delay_ms, 1500);
        assert_eq!(config.storage.backend, StorageBackend::Sled);
    }

    #[test]
    fn test_storage_backend_is_lowercase() {
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
    }
}

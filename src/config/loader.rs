//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（lingli.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StorageBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["lingli", "lingli.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `LINGLI_`，层级分隔符 `__`）
/// 2. 配置文件（lingli.toml 或 lingli.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `LINGLI_API__BASE_URL=https://api.example.com/api/v1`
/// - `LINGLI_API__TIMEOUT_SECS=5`
/// - `LINGLI_STORAGE__BACKEND=memory`
/// - `LINGLI_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）；headers 由 serde 默认值提供
    builder = builder
        .set_default("api.base_url", "http://localhost:8081/api/v1")?
        .set_default("api.timeout_secs", 10)?
        .set_default("ui.loading_title", "加载中...")?
        .set_default("ui.session_expired_message", "登录已过期")?
        .set_default("ui.request_failed_message", "请求失败")?
        .set_default("ui.network_error_message", "网络请求失败")?
        .set_default("ui.login_page", "/pages/auth/login")?
        .set_default("ui.redirect_delay_ms", 1500)?
        .set_default("storage.backend", "sled")?
        .set_default("storage.path", "data/credentials.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: LINGLI_API__BASE_URL=http://10.0.0.2:8081/api/v1
    builder = builder.add_source(
        Environment::with_prefix("LINGLI")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = &config.api.base_url;
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "API base URL cannot be empty".to_string(),
        ));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "API base URL must start with http:// or https://: {}",
            base_url
        )));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "API timeout cannot be 0".to_string(),
        ));
    }

    if !config.ui.login_page.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "Login page must be an absolute page path: {}",
            config.ui.login_page
        )));
    }

    if config.storage.backend == StorageBackend::Sled && config.storage.path.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Storage path cannot be empty for sled backend".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("API Base URL: {}", config.api.base_url);
    tracing::info!("API Timeout: {}s", config.api.timeout_secs);
    for (name, value) in &config.api.headers {
        tracing::info!("Default Header: {}: {}", name, value);
    }
    tracing::info!("Login Page: {}", config.ui.login_page);
    tracing::info!("Redirect Delay: {}ms", config.ui.redirect_delay_ms);
    tracing::info!("Storage Backend: {:?}", config.storage.backend);
    if config.storage.backend == StorageBackend::Sled {
        tracing::info!("Storage Path: {:?}", config.storage.path);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_non_http_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "localhost:8081".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_relative_login_page() {
        let mut config = AppConfig::default();
        config.ui.login_page = "pages/auth/login".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_memory_backend_ignores_path() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.storage.path = Default::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://api.example.com/api/v1"
timeout_secs = 5

[storage]
backend = "memory"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/api/v1");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.ui.login_page, "/pages/auth/login");
        assert!(!config.api.headers.is_empty());
    }
}

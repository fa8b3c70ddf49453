//! Lingli API - 启动入口
//!
//! 加载配置、初始化日志、组装 ApiClient，并拉取首页目录数据

use std::sync::Arc;

use lingli_api::application::{ApiClient, GatewayConfig, RequestGateway, UiPorts};
use lingli_api::config::{load_config, print_config, LogConfig};
use lingli_api::infrastructure::{
    open_credential_store, RefCountedIndicator, ReqwestTransport, ReqwestTransportConfig,
    TracingUi,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},lingli_api={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Lingli API client");
    print_config(&config);

    // 令牌存储
    let credentials = open_credential_store(&config.storage)?;

    // HTTP 传输
    let transport = Arc::new(ReqwestTransport::new(ReqwestTransportConfig::from(&config.api))?);

    // 无界面宿主；并发请求共用一个加载提示
    let ui = Arc::new(TracingUi::new());
    let ui_ports = UiPorts::from_shared(ui.clone())
        .with_loading(RefCountedIndicator::new(ui).arc());

    let gateway = RequestGateway::new(
        GatewayConfig::from_app_config(&config),
        transport,
        credentials,
        ui_ports,
    );
    let client = ApiClient::new(gateway);

    tracing::info!(logged_in = client.is_logged_in(), "ApiClient ready");

    let (hot, top) = tokio::join!(
        client.product.get_hot_packages(None),
        client.product.get_top_categories(),
    );

    match hot {
        Ok(result) => {
            let packages = result.data.unwrap_or_default();
            tracing::info!(count = packages.len(), "Hot packages loaded");
            for package in &packages {
                tracing::info!(
                    id = ?package.id,
                    name = package.name.as_deref().unwrap_or("-"),
                    price = ?package.price,
                    "Hot package"
                );
            }
        }
        Err(e) => tracing::warn!(error = %e, "Failed to load hot packages"),
    }

    match top {
        Ok(result) => {
            let categories = result.data.unwrap_or_default();
            tracing::info!(count = categories.len(), "Top categories loaded");
        }
        Err(e) => tracing::warn!(error = %e, "Failed to load top categories"),
    }

    // 401 时跳转登录页是延迟执行的，退出前等它完成
    client.request.wait_for_redirects().await;

    Ok(())
}

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（令牌存储、HTTP 传输、界面能力）
//! - gateway: 请求网关
//! - endpoints: 认证 / 商品接口绑定
//! - client: 组装后的 ApiClient
//! - error: 应用层错误定义

pub mod client;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod ports;

pub use client::ApiClient;
pub use endpoints::{AuthApi, ProductApi, DEFAULT_PACKAGE_LIMIT};
pub use error::ApiError;
pub use gateway::{GatewayConfig, RequestGateway, UiPorts};

pub use ports::{
    CredentialStorePort, HttpTransportPort, LoadingIndicatorPort, NavigatorPort, NotifierPort,
    StorageError, TransportError, TransportRequest, TransportResponse,
};

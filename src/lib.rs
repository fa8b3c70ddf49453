//! Lingli API - 体检小程序后端 API 客户端
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Auth Context: 令牌、登录 / 注册请求、用户信息
//! - Catalog Context: 分类、套餐、查询参数
//! - Request Context: 请求描述、查询字符串、统一返回结构
//!
//! 应用层 (application/):
//! - Ports: 端口定义（CredentialStore, HttpTransport, LoadingIndicator, Notifier, Navigator）
//! - Gateway: 请求网关（令牌注入、加载提示、状态码分支）
//! - Endpoints: 认证 / 商品接口绑定
//! - Client: ApiClient
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Reqwest / Scripted 传输，Tracing / Recording UI
//! - Persistence: 内存与 Sled 令牌存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{ApiClient, ApiError, GatewayConfig, RequestGateway, UiPorts};
pub use config::{load_config, AppConfig};

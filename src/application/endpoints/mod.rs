//! Endpoint Bindings - 固定路由的接口绑定
//!
//! 只做路由 / 方法 / 参数映射，失败语义全部来自网关

mod auth;
mod product;

pub use auth::AuthApi;
pub use product::{ProductApi, DEFAULT_PACKAGE_LIMIT};

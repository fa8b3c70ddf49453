//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Auth Context: 令牌与用户
//! - Catalog Context: 分类与套餐
//! - Request Context: 请求描述、查询参数、统一返回结构

pub mod auth;
pub mod catalog;
pub mod request;

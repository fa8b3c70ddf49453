//! Catalog Context - 商品目录限界上下文
//!
//! 职责:
//! - 分类树 / 套餐数据结构
//! - 列表与搜索查询参数

mod models;

pub use models::{CategoryVo, PackageListParams, PackageVo, SearchParams};

//! Request Context - 请求描述、查询参数与返回结构

mod descriptor;
mod envelope;
mod query;

pub use descriptor::RequestDescriptor;
pub use envelope::{ApiResult, PageResult};
pub use query::{QueryError, QueryParams};

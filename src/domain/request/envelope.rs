//! Response Envelope - 服务端统一返回结构

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 服务端统一返回结果 `{ code, message, data, errors, timestamp }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    #[serde(default)]
    pub code: Option<i32>,

    #[serde(default)]
    pub message: Option<String>,

    pub data: Option<T>,

    /// 错误详情（校验失败时的字段错误等）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,

    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        self.code.map_or(true, |code| code == 200)
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub current: i64,
    #[serde(default)]
    pub pages: i64,
}

impl<T> PageResult<T> {
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }
}

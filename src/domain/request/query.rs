//! Query Parameters - 查询字符串构建
//!
//! 仅支持扁平的 `key=value` 形式，值做 URL 编码，键原样输出。
//! 不支持数组或嵌套对象。

use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("查询参数必须是对象")]
    NotAnObject,

    #[error("不支持的查询参数值: {0}")]
    UnsupportedValue(String),

    #[error("查询参数序列化失败: {0}")]
    Serialization(String),
}

/// 有序的查询参数列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数（保持插入顺序）
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// 仅在值存在时追加
    pub fn with_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// 从可序列化对象构建，字段顺序即序列化顺序
    ///
    /// `null` 值被跳过，数组和对象值返回错误
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self, QueryError> {
        let value =
            serde_json::to_value(params).map_err(|e| QueryError::Serialization(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(QueryError::NotAnObject);
        };

        let mut query = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => query.push(key, s),
                Value::Number(n) => query.push(key, n),
                Value::Bool(b) => query.push(key, b),
                Value::Array(_) | Value::Object(_) => {
                    return Err(QueryError::UnsupportedValue(key));
                }
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// 序列化为 `k1=v1&k2=v2`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// 拼接到路径后；无参数时返回原路径
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.push(key, value);
        }
        query
    }
}

//! Request Descriptor - 单次请求描述

use http::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 请求描述
///
/// 构建完成后不可变，由网关消费一次。
/// 头部名称统一以小写存储，同名头部后写覆盖先写。
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    path: String,
    method: Method,
    body: Value,
    headers: BTreeMap<String, String>,
    loading: bool,
}

impl RequestDescriptor {
    /// 创建 GET 请求，body 为空对象，显示加载提示
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            body: Value::Object(Map::new()),
            headers: BTreeMap::new(),
            loading: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::POST)
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// 序列化任意结构作为请求体
    pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(body)?;
        Ok(self.with_body(value))
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// 关闭加载提示
    pub fn without_loading(mut self) -> Self {
        self.loading = false;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn shows_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn into_parts(self) -> DescriptorParts {
        DescriptorParts {
            path: self.path,
            method: self.method,
            body: self.body,
            headers: self.headers,
            loading: self.loading,
        }
    }
}

/// 拆解后的请求描述（网关内部使用）
pub(crate) struct DescriptorParts {
    pub path: String,
    pub method: Method,
    pub body: Value,
    pub headers: BTreeMap<String, String>,
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let descriptor = RequestDescriptor::new("/auth/profile");
        assert_eq!(descriptor.path(), "/auth/profile");
        assert_eq!(descriptor.method(), &Method::GET);
        assert_eq!(descriptor.body(), &json!({}));
        assert!(descriptor.headers().is_empty());
        assert!(descriptor.shows_loading());
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let descriptor = RequestDescriptor::get("/x")
            .with_header("X-Trace", "a")
            .with_header("x-trace", "b");
        assert_eq!(descriptor.headers().len(), 1);
        assert_eq!(descriptor.headers().get("x-trace").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_with_json() {
        #[derive(Serialize)]
        struct Body {
            user: &'static str,
        }

        let descriptor = RequestDescriptor::post("/auth/login")
            .with_json(&Body { user: "a" })
            .unwrap()
            .without_loading();
        assert_eq!(descriptor.method(), &Method::POST);
        assert_eq!(descriptor.body(), &json!({ "user": "a" }));
        assert!(!descriptor.shows_loading());
    }
}

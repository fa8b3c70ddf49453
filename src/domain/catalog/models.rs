//! Catalog Context - 分类与套餐

use serde::{Deserialize, Serialize};

use crate::domain::request::QueryParams;

/// 套餐分类（树形结构）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub children: Vec<CategoryVo>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl CategoryVo {
    /// 深度优先统计当前节点及所有子孙节点
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CategoryVo::node_count).sum::<usize>()
    }
}

/// 体检套餐
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageVo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub detail_images: Vec<String>,
    #[serde(default)]
    pub test_items: Vec<String>,
    /// 采样方式：1-自采样，2-上门采样，3-两种方式
    #[serde(default)]
    pub sampling_method: Option<i32>,
    #[serde(default)]
    pub sampling_method_desc: Option<String>,
    #[serde(default)]
    pub report_delivery_days: Option<i32>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub on_shelf: Option<bool>,
    #[serde(default)]
    pub discount_percent: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sales_count: Option<i32>,
}

/// 套餐列表查询参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageListParams {
    pub category_id: Option<i64>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PackageListParams> for QueryParams {
    fn from(params: PackageListParams) -> Self {
        QueryParams::new()
            .with_opt("categoryId", params.category_id)
            .with_opt("keyword", params.keyword)
            .with_opt("page", params.page)
            .with_opt("size", params.size)
    }
}

/// 套餐搜索参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl SearchParams {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page: None,
            size: None,
        }
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}

impl From<SearchParams> for QueryParams {
    fn from(params: SearchParams) -> Self {
        QueryParams::new()
            .with("keyword", params.keyword)
            .with_opt("page", params.page)
            .with_opt("size", params.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_list_params_order() {
        let params = PackageListParams {
            category_id: Some(3),
            keyword: None,
            page: Some(1),
            size: Some(20),
        };
        let query: QueryParams = params.into();
        assert_eq!(query.to_query_string(), "categoryId=3&page=1&size=20");
    }

    #[test]
    fn test_search_params() {
        let query: QueryParams = SearchParams::new("肝 功能").with_page(2, 10).into();
        assert_eq!(
            query.to_query_string(),
            "keyword=%E8%82%9D%20%E5%8A%9F%E8%83%BD&page=2&size=10"
        );
    }

    #[test]
    fn test_decode_category_tree() {
        let tree: Vec<CategoryVo> = serde_json::from_value(json!([
            {
                "id": 1,
                "name": "基础体检",
                "children": [
                    { "id": 11, "name": "血液", "parentId": 1 },
                    { "id": 12, "name": "尿液", "parentId": 1, "children": [] }
                ]
            }
        ]))
        .unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].node_count(), 3);
        assert_eq!(tree[0].children[0].parent_id, Some(1));
    }

    #[test]
    fn test_decode_package() {
        let package: PackageVo = serde_json::from_value(json!({
            "id": 5,
            "name": "肝功能套餐",
            "price": 199.0,
            "testItems": ["ALT", "AST"],
            "onShelf": true
        }))
        .unwrap();

        assert_eq!(package.id, Some(5));
        assert_eq!(package.test_items.len(), 2);
        assert_eq!(package.on_shelf, Some(true));
        assert!(package.tags.is_empty());
    }
}

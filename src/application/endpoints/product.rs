//! 商品相关接口

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApiError;
use crate::application::gateway::RequestGateway;
use crate::domain::catalog::{CategoryVo, PackageVo};
use crate::domain::request::{ApiResult, PageResult, QueryParams, RequestDescriptor};

pub const CATEGORY_TREE_PATH: &str = "/products/categories/tree";
pub const TOP_CATEGORIES_PATH: &str = "/products/categories/top";
pub const CATEGORIES_PATH: &str = "/products/categories";
pub const PACKAGES_PATH: &str = "/products/packages";
pub const HOT_PACKAGES_PATH: &str = "/products/packages/hot";
pub const RECOMMENDED_PACKAGES_PATH: &str = "/products/packages/recommended";
pub const SEARCH_PACKAGES_PATH: &str = "/products/packages/search";

/// 热门 / 推荐套餐默认数量
pub const DEFAULT_PACKAGE_LIMIT: u32 = 10;

/// 商品接口组
#[derive(Clone)]
pub struct ProductApi {
    gateway: Arc<RequestGateway>,
}

impl ProductApi {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// 分类树
    pub async fn get_category_tree(&self) -> Result<ApiResult<Vec<CategoryVo>>, ApiError> {
        self.get(CATEGORY_TREE_PATH.to_string()).await
    }

    /// 顶级分类
    pub async fn get_top_categories(&self) -> Result<ApiResult<Vec<CategoryVo>>, ApiError> {
        self.get(TOP_CATEGORIES_PATH.to_string()).await
    }

    /// 分类详情
    pub async fn get_category_detail(
        &self,
        category_id: i64,
    ) -> Result<ApiResult<CategoryVo>, ApiError> {
        self.get(format!("{}/{}", CATEGORIES_PATH, category_id)).await
    }

    /// 套餐列表
    pub async fn get_package_list(
        &self,
        params: impl Into<QueryParams>,
    ) -> Result<ApiResult<PageResult<PackageVo>>, ApiError> {
        let query: QueryParams = params.into();
        self.get(query.append_to(PACKAGES_PATH)).await
    }

    /// 套餐详情
    pub async fn get_package_detail(
        &self,
        package_id: i64,
    ) -> Result<ApiResult<PackageVo>, ApiError> {
        self.get(format!("{}/{}", PACKAGES_PATH, package_id)).await
    }

    /// 热门套餐，`limit` 缺省为 10
    pub async fn get_hot_packages(
        &self,
        limit: Option<u32>,
    ) -> Result<ApiResult<Vec<PackageVo>>, ApiError> {
        self.get(limited(HOT_PACKAGES_PATH, limit)).await
    }

    /// 推荐套餐，`limit` 缺省为 10
    pub async fn get_recommended_packages(
        &self,
        limit: Option<u32>,
    ) -> Result<ApiResult<Vec<PackageVo>>, ApiError> {
        self.get(limited(RECOMMENDED_PACKAGES_PATH, limit)).await
    }

    /// 搜索套餐
    pub async fn search_packages(
        &self,
        params: impl Into<QueryParams>,
    ) -> Result<ApiResult<PageResult<PackageVo>>, ApiError> {
        let query: QueryParams = params.into();
        self.get(query.append_to(SEARCH_PACKAGES_PATH)).await
    }

    /// 套餐列表，查询参数取自任意可序列化的对象
    pub async fn get_package_list_by<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<ApiResult<PageResult<PackageVo>>, ApiError> {
        let query = QueryParams::from_serialize(params)?;
        self.get(query.append_to(PACKAGES_PATH)).await
    }

    /// 搜索套餐，查询参数取自任意可序列化的对象
    pub async fn search_packages_by<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<ApiResult<PageResult<PackageVo>>, ApiError> {
        let query = QueryParams::from_serialize(params)?;
        self.get(query.append_to(SEARCH_PACKAGES_PATH)).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: String) -> Result<T, ApiError> {
        self.gateway.send_as(RequestDescriptor::get(path)).await
    }
}

fn limited(path: &str, limit: Option<u32>) -> String {
    QueryParams::new()
        .with("limit", limit.unwrap_or(DEFAULT_PACKAGE_LIMIT))
        .append_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gateway::{GatewayConfig, UiPorts};
    use crate::domain::catalog::{PackageListParams, SearchParams};
    use crate::infrastructure::adapters::{RecordingUi, ScriptedReply, ScriptedTransport};
    use crate::infrastructure::persistence::memory::InMemoryCredentialStore;
    use http::Method;
    use serde_json::json;

    const BASE: &str = "http://localhost:8081/api/v1";

    fn product_api(replies: Vec<ScriptedReply>) -> (ProductApi, Arc<ScriptedTransport>) {
        let transport = Arc::new(ScriptedTransport::new(replies));
        let gateway = RequestGateway::new(
            GatewayConfig::default(),
            transport.clone(),
            Arc::new(InMemoryCredentialStore::new()),
            UiPorts::from_shared(Arc::new(RecordingUi::new())),
        );
        (ProductApi::new(gateway.arc()), transport)
    }

    fn ok(data: serde_json::Value) -> ScriptedReply {
        ScriptedReply::json(200, json!({ "code": 200, "message": "success", "data": data }))
    }

    async fn urls(transport: &ScriptedTransport) -> Vec<String> {
        transport
            .requests()
            .await
            .into_iter()
            .map(|r| {
                assert_eq!(r.method, Method::GET);
                r.url.trim_start_matches(BASE).to_string()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_category_routes() {
        let (api, transport) = product_api(vec![
            ok(json!([{ "id": 1, "children": [{ "id": 2 }] }])),
            ok(json!([{ "id": 1 }])),
            ok(json!({ "id": 42, "name": "肿瘤筛查" })),
        ]);

        let tree = api.get_category_tree().await.unwrap();
        api.get_top_categories().await.unwrap();
        let detail = api.get_category_detail(42).await.unwrap();

        assert_eq!(tree.data.unwrap()[0].node_count(), 2);
        assert_eq!(detail.data.unwrap().name.as_deref(), Some("肿瘤筛查"));
        assert_eq!(
            urls(&transport).await,
            vec![
                "/products/categories/tree",
                "/products/categories/top",
                "/products/categories/42",
            ]
        );
    }

    #[tokio::test]
    async fn test_hot_and_recommended_default_limit() {
        let (api, transport) = product_api(vec![
            ok(json!([])),
            ok(json!([])),
            ok(json!([])),
        ]);

        api.get_hot_packages(None).await.unwrap();
        api.get_recommended_packages(None).await.unwrap();
        api.get_hot_packages(Some(3)).await.unwrap();

        assert_eq!(
            urls(&transport).await,
            vec![
                "/products/packages/hot?limit=10",
                "/products/packages/recommended?limit=10",
                "/products/packages/hot?limit=3",
            ]
        );
    }

    #[tokio::test]
    async fn test_package_list_and_detail() {
        let (api, transport) = product_api(vec![
            ok(json!({ "records": [{ "id": 5, "name": "基础套餐" }], "total": 1, "size": 10, "current": 1, "pages": 1 })),
            ok(json!({ "id": 5, "price": 99.0 })),
        ]);

        let page = api
            .get_package_list(PackageListParams {
                category_id: Some(2),
                page: Some(1),
                size: Some(10),
                ..Default::default()
            })
            .await
            .unwrap()
            .data
            .unwrap();
        let detail = api.get_package_detail(5).await.unwrap().data.unwrap();

        assert_eq!(page.records.len(), 1);
        assert!(!page.has_next());
        assert_eq!(detail.price, Some(99.0));
        assert_eq!(
            urls(&transport).await,
            vec![
                "/products/packages?categoryId=2&page=1&size=10",
                "/products/packages/5",
            ]
        );
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let (api, transport) = product_api(vec![ok(json!({ "records": [] })), ok(json!({ "records": [] }))]);

        api.search_packages(QueryParams::new().with("q", "a b").with("page", 2))
            .await
            .unwrap();
        api.search_packages(SearchParams::new("体检")).await.unwrap();

        assert_eq!(
            urls(&transport).await,
            vec![
                "/products/packages/search?q=a%20b&page=2",
                "/products/packages/search?keyword=%E4%BD%93%E6%A3%80",
            ]
        );
    }

    #[tokio::test]
    async fn test_serializable_params_build_query() {
        let (api, transport) = product_api(vec![ok(json!({ "records": [] })), ok(json!({ "records": [] }))]);

        api.get_package_list_by(&json!({ "categoryId": 3, "keyword": null, "page": 1 }))
            .await
            .unwrap();
        #[derive(Serialize)]
        struct Filter {
            keyword: &'static str,
            page: u32,
        }
        api.search_packages_by(&Filter {
            keyword: "胃镜",
            page: 2,
        })
        .await
        .unwrap();

        assert_eq!(
            urls(&transport).await,
            vec![
                "/products/packages?categoryId=3&page=1",
                "/products/packages/search?keyword=%E8%83%83%E9%95%9C&page=2",
            ]
        );
    }

    #[tokio::test]
    async fn test_nested_params_are_rejected_before_sending() {
        let (api, transport) = product_api(vec![]);

        let err = api
            .search_packages_by(&json!({ "tags": ["a", "b"] }))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidQuery(_)));
        assert!(transport.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_detail_with_unexpected_shape_fails_with_toast() {
        let transport = Arc::new(ScriptedTransport::new(vec![ok(json!({ "id": "P-1" }))]));
        let ui = Arc::new(RecordingUi::new());
        let gateway = RequestGateway::new(
            GatewayConfig::default(),
            transport,
            Arc::new(InMemoryCredentialStore::new()),
            UiPorts::from_shared(ui.clone()),
        );
        let api = ProductApi::new(gateway.arc());

        let err = api.get_package_detail(1).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(ui.toasts(), vec!["请求失败".to_string()]);
    }
}

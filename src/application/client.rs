//! ApiClient - 应用启动时组装的全局 API 句柄
//!
//! 对应前端全局挂载的 `{ request, auth, product }`

use std::sync::Arc;

use crate::application::endpoints::{AuthApi, ProductApi};
use crate::application::gateway::RequestGateway;
use crate::application::ports::{CredentialStorePort, StorageError};

/// API 客户端
#[derive(Clone)]
pub struct ApiClient {
    /// 通用请求入口
    pub request: Arc<RequestGateway>,
    /// 认证接口
    pub auth: AuthApi,
    /// 商品接口
    pub product: ProductApi,
}

impl ApiClient {
    pub fn new(gateway: RequestGateway) -> Self {
        let request = gateway.arc();
        Self {
            auth: AuthApi::new(request.clone()),
            product: ProductApi::new(request.clone()),
            request,
        }
    }

    /// 是否持有访问令牌（不校验有效性）
    pub fn is_logged_in(&self) -> bool {
        matches!(self.request.credentials().access_token(), Ok(Some(_)))
    }

    /// 本地退出登录：清除两个令牌
    pub fn logout(&self) -> Result<(), StorageError> {
        self.credentials().clear_tokens()?;
        tracing::info!("Credentials cleared");
        Ok(())
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStorePort> {
        self.request.credentials()
    }
}

//! 认证相关接口

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApiError;
use crate::application::gateway::RequestGateway;
use crate::domain::auth::UserVo;
use crate::domain::request::{ApiResult, RequestDescriptor};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/auth/profile";
pub const REFRESH_PATH: &str = "/auth/refresh";

/// 认证接口组
#[derive(Clone)]
pub struct AuthApi {
    gateway: Arc<RequestGateway>,
}

impl AuthApi {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// 登录；响应携带令牌时写入令牌存储
    pub async fn login<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResult<UserVo>, ApiError> {
        let result = self.post(LOGIN_PATH, data).await?;
        self.persist_tokens(&result)?;
        Ok(result)
    }

    /// 注册
    pub async fn register<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult<UserVo>, ApiError> {
        self.post(REGISTER_PATH, data).await
    }

    /// 获取当前用户信息
    pub async fn get_profile(&self) -> Result<ApiResult<UserVo>, ApiError> {
        self.gateway
            .send_as(RequestDescriptor::get(PROFILE_PATH))
            .await
    }

    /// 刷新令牌；响应携带新令牌时整体覆盖写入
    pub async fn refresh_token<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResult<UserVo>, ApiError> {
        let result = self.post(REFRESH_PATH, data).await?;
        self.persist_tokens(&result)?;
        Ok(result)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
    ) -> Result<ApiResult<UserVo>, ApiError> {
        let descriptor = RequestDescriptor::post(path)
            .with_json(data)
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;
        self.gateway.send_as(descriptor).await
    }

    fn persist_tokens(&self, result: &ApiResult<UserVo>) -> Result<(), ApiError> {
        if let Some(tokens) = result.data.as_ref().and_then(UserVo::token_pair) {
            self.gateway.credentials().store_tokens(&tokens)?;
            tracing::info!(
                has_refresh_token = tokens.refresh.is_some(),
                "Credentials stored"
            );
        }
        Ok(())
    }
}

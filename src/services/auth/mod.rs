pub mod login;
pub mod password_reset;
pub mod profile;
pub mod send_code;
pub mod token;
pub mod verify_code;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SendVerificationCodeRequest,
    VerifyCodeRequest,
};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    // 注册第一步：发送验证码
    pub async fn send_verification_code(
        &self,
        request_data: SendVerificationCodeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send_code::handle_send_verification_code(self, request_data, request).await
    }

    // 注册第二步：校验验证码并建号
    pub async fn verify_code(
        &self,
        request_data: VerifyCodeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify_code::handle_verify_code(self, request_data, request).await
    }

    // 登录
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 刷新访问令牌
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, request).await
    }

    // 注销
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_logout(self, request).await
    }

    // 当前用户信息
    pub async fn get_user(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_get_user(self, request).await
    }

    // 密码重置第一步：统一响应，不泄露账号是否存在
    pub async fn forgot_password(
        &self,
        request_data: ForgotPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_forgot_password(self, request_data, request).await
    }

    // 密码重置第二步：校验验证码并更新密码
    pub async fn reset_password(
        &self,
        request_data: ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_reset_password(self, request_data, request).await
    }
}

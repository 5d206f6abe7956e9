use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SendVerificationCodeRequest,
    VerifyCodeRequest,
};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn send_verification_code(
    req: HttpRequest,
    request_data: web::Json<SendVerificationCodeRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .send_verification_code(request_data.into_inner(), &req)
        .await
}

pub async fn verify_code(
    req: HttpRequest,
    request_data: web::Json<VerifyCodeRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_code(request_data.into_inner(), &req).await
}

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

pub async fn get_user(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&request).await
}

pub async fn forgot_password(
    req: HttpRequest,
    request_data: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .forgot_password(request_data.into_inner(), &req)
        .await
}

pub async fn reset_password(
    req: HttpRequest,
    request_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .reset_password(request_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::scope("/send-verification-code")
                    .wrap(middlewares::RateLimit::send_code())
                    .route("", web::post().to(send_verification_code)),
            )
            .service(
                web::scope("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route("", web::post().to(login)),
            )
            .service(
                web::scope("/refresh")
                    .wrap(middlewares::RateLimit::refresh_token())
                    .route("", web::post().to(refresh_token)),
            )
            .route("/verify-code", web::post().to(verify_code))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/reset-password", web::post().to(reset_password))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/logout", web::post().to(logout))
                    .route("/me", web::get().to(get_user)),
            ),
    );
}

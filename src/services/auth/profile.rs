use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::RequireJWT;
use crate::models::auth::UserInfoResponse;
use crate::models::{ApiResponse, ErrorCode};

/// GET /auth/me：认证中间件已经把用户放进了请求扩展
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserInfoResponse { user }, "查询成功")))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}

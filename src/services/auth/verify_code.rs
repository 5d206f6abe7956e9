use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use super::send_code::PendingSignup;
use crate::models::auth::entities::CodePurpose;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::VerifyCodeRequest};

/// 注册第二步：验证码匹配则正式建号并销毁验证码
pub async fn handle_verify_code(
    service: &AuthService,
    request_data: VerifyCodeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let record = match storage
        .find_valid_verification_code(&request_data.email, CodePurpose::Signup, &request_data.code)
        .await
    {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::VerificationCodeInvalid,
                "Verification code is invalid or expired",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check verification code: {e}"),
                )),
            );
        }
    };

    let pending: PendingSignup = match record
        .payload
        .as_deref()
        .and_then(|p| serde_json::from_str(p).ok())
    {
        Some(pending) => pending,
        None => {
            error!(
                "Verification code {} has no usable signup payload",
                record.id
            );
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::VerificationCodeInvalid,
                "Verification code is invalid or expired",
            )));
        }
    };

    let create_request = CreateUserRequest {
        name: pending.name,
        username: pending.username,
        email: pending.email,
        // 发送验证码时已经完成哈希
        password: pending.password_hash,
        role: UserRole::Student,
        email_verified: true,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            // 用过即焚
            let _ = storage.consume_verification_code(record.id).await;

            info!("User {} registered via email verification", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "注册成功")))
        }
        Err(e) => {
            let msg = format!("Register failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                // 验证码有效期内用户名/邮箱被他人抢注
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserNameAlreadyExists,
                    "Username or email has been taken",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)))
            }
        }
    }
}

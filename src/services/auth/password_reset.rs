use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AuthService;
use crate::email::templates;
use crate::models::auth::entities::CodePurpose;
use crate::models::auth::requests::UpsertVerificationCodeRequest;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{ForgotPasswordRequest, ResetPasswordRequest},
};
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_numeric_code;
use crate::utils::validate::validate_password_simple;

const UNIFORM_RESPONSE: &str = "If this email exists, a reset code has been sent";

/// 密码重置第一步。
/// 无论邮箱是否存在都返回同一句话，发信失败也只记日志——
/// 这里的任何差异化响应都会泄露账号是否存在。
pub async fn handle_forgot_password(
    service: &AuthService,
    request_data: ForgotPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let user = match storage.get_user_by_email(&request_data.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success_empty(UNIFORM_RESPONSE)));
        }
        Err(e) => {
            // 存储错误同样掩盖
            warn!("Forgot-password lookup failed: {}", e);
            return Ok(HttpResponse::Ok().json(ApiResponse::success_empty(UNIFORM_RESPONSE)));
        }
    };

    let code = generate_numeric_code(config.verification.code_length);
    let expires_at =
        chrono::Utc::now() + chrono::Duration::minutes(config.verification.code_ttl_minutes);

    let record = UpsertVerificationCodeRequest {
        email: user.email.clone(),
        code: code.clone(),
        purpose: CodePurpose::PasswordReset,
        payload: None,
        expires_at,
    };

    if let Err(e) = storage.upsert_verification_code(record).await {
        warn!("Failed to store password reset code: {}", e);
        return Ok(HttpResponse::Ok().json(ApiResponse::success_empty(UNIFORM_RESPONSE)));
    }

    // 发信失败吞掉，只记日志
    if let Err(e) = templates::send_password_reset_code(&user.email, &code).await {
        warn!("Failed to send password reset email: {}", e);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(UNIFORM_RESPONSE)))
}

/// 密码重置第二步：验证码匹配则更新密码并销毁验证码
pub async fn handle_reset_password(
    service: &AuthService,
    request_data: ResetPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_password_simple(&request_data.new_password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordPolicyViolation,
            msg,
        )));
    }

    let record = match storage
        .find_valid_verification_code(
            &request_data.email,
            CodePurpose::PasswordReset,
            &request_data.code,
        )
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

    let user = match storage.get_user_by_email(&request_data.email).await {
        Ok(Some(user)) => user,
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
                    format!("Failed to load user: {e}"),
                )),
            );
        }
    };

    let password_hash = match hash_password(&request_data.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let update = UpdateUserRequest {
        email: None,
        password: Some(password_hash),
        role: None,
        status: None,
    };

    match storage.update_user(user.id, update).await {
        Ok(Some(_)) => {
            let _ = storage.consume_verification_code(record.id).await;
            info!("User {} reset password via email code", user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("密码重置成功，请重新登录")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to reset password: {e}"),
            )),
        ),
    }
}

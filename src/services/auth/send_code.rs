use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::email::templates;
use crate::models::auth::entities::CodePurpose;
use crate::models::auth::requests::UpsertVerificationCodeRequest;
use crate::models::{ApiResponse, ErrorCode, auth::SendVerificationCodeRequest};
use crate::utils::random_code::generate_numeric_code;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

/// 注册第一步：校验请求、落库验证码、发送验证邮件。
/// 发信失败会原样上抛给调用方（与密码重置的静默策略不同），
/// 避免用户停在一个永远收不到邮件的流程里。
pub async fn handle_send_verification_code(
    service: &AuthService,
    mut request_data: SendVerificationCodeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 校验用户名
    if let Err(msg) = validate_username(&request_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 校验邮箱
    if let Err(msg) = validate_email(&request_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 校验密码策略
    if let Err(msg) = validate_password_simple(&request_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordPolicyViolation,
            msg,
        )));
    }

    // 用户名/邮箱占用检查
    match storage.get_user_by_username(&request_data.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserNameAlreadyExists,
                "Username already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check username: {e}"),
                )),
            );
        }
    }

    match storage.get_user_by_email(&request_data.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check email: {e}"),
                )),
            );
        }
    }

    // 先哈希再入库，验证码记录里不保存明文密码
    request_data.password = match crate::utils::password::hash_password(&request_data.password) {
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

    let payload = match serde_json::to_string(&PendingSignup {
        name: request_data.name.clone(),
        username: request_data.username.clone(),
        email: request_data.email.clone(),
        password_hash: request_data.password.clone(),
    }) {
        Ok(payload) => payload,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to serialize signup payload: {e}"),
                )),
            );
        }
    };

    let code = generate_numeric_code(config.verification.code_length);
    let expires_at =
        chrono::Utc::now() + chrono::Duration::minutes(config.verification.code_ttl_minutes);

    let record = UpsertVerificationCodeRequest {
        email: request_data.email.clone(),
        code: code.clone(),
        purpose: CodePurpose::Signup,
        payload: Some(payload),
        expires_at,
    };

    if let Err(e) = storage.upsert_verification_code(record).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to store verification code: {e}"),
            )),
        );
    }

    // 注册验证邮件发送失败不吞掉
    if let Err(e) = templates::send_verification_code(&request_data.email, &code).await {
        error!("Failed to send verification email: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EmailSendFailed,
                "Failed to send verification email, please try again later",
            )),
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("验证码已发送，请查收邮件")))
}

/// 待注册请求的落库负载
#[derive(serde::Serialize, serde::Deserialize)]
pub(super) struct PendingSignup {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

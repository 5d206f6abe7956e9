use serde::Deserialize;
use ts_rs::TS;

// 登录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    // 用户名或邮箱
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 注册第一步：发送验证码
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct SendVerificationCodeRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

// 注册第二步：校验验证码并建号
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

// 验证码落库记录（同一邮箱+用途只保留最新一条）
#[derive(Debug, Clone)]
pub struct UpsertVerificationCodeRequest {
    pub email: String,
    pub code: String,
    pub purpose: super::entities::CodePurpose,
    pub payload: Option<String>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

// 密码重置第一步
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

// 密码重置第二步
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

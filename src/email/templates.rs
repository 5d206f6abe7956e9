//! 邮件模板

use super::{EmailResult, smtp};
use crate::config::AppConfig;

/// 注册验证码邮件
pub async fn send_verification_code(to: &str, code: &str) -> EmailResult<()> {
    let config = AppConfig::get();
    let system_name = &config.app.system_name;
    let ttl_minutes = config.verification.code_ttl_minutes;
    let subject = format!("{system_name} - 注册验证码");
    let body = format!(
        "欢迎注册 {system_name}！\n\n你的验证码是：{code}\n\n验证码 {ttl_minutes} 分钟内有效，请勿泄露给他人。"
    );
    smtp::send_email(to, &subject, &body).await
}

/// 密码重置验证码邮件
pub async fn send_password_reset_code(to: &str, code: &str) -> EmailResult<()> {
    let system_name = &AppConfig::get().app.system_name;
    let subject = format!("{system_name} - 密码重置");
    let body = format!(
        "你正在重置 {system_name} 的账号密码。\n\n验证码是：{code}\n\n如果这不是你的操作，请忽略本邮件。"
    );
    smtp::send_email(to, &subject, &body).await
}

//! SMTP 发送实现

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use super::EmailResult;
use crate::config::AppConfig;
use crate::errors::CampusRateError;

/// 发送一封纯文本邮件
pub async fn send_email(to: &str, subject: &str, body_text: &str) -> EmailResult<()> {
    let config = &AppConfig::get().email;

    // mock 模式：只打日志，便于本地开发与测试
    if config.mock {
        info!(
            "MOCK EMAIL to={} subject={} body:\n{}",
            to, subject, body_text
        );
        return Ok(());
    }

    let from: Mailbox = format!("{} <{}>", config.from_name, config.from_email)
        .parse()
        .map_err(|e| CampusRateError::mail_delivery(format!("Invalid from address: {e}")))?;

    let to_mailbox: Mailbox = to
        .parse()
        .map_err(|e| CampusRateError::mail_delivery(format!("Invalid to address: {e}")))?;

    let email = Message::builder()
        .from(from)
        .to(to_mailbox)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body_text.to_string())?;

    let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

    let mailer: AsyncSmtpTransport<Tokio1Executor> = if config.use_tls {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(creds)
            .port(config.smtp_port)
            .build()
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            .credentials(creds)
            .port(config.smtp_port)
            .build()
    };

    mailer.send(email).await?;

    info!("Email sent successfully to: {}", to);

    Ok(())
}

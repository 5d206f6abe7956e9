//! 邮件发送模块
//!
//! 基于 lettre 的 SMTP 发送，支持 mock 模式（开发环境只打日志不真正发信）。

pub mod smtp;
pub mod templates;

use crate::errors::CampusRateError;

pub type EmailResult<T> = std::result::Result<T, CampusRateError>;

impl From<lettre::error::Error> for CampusRateError {
    fn from(e: lettre::error::Error) -> Self {
        CampusRateError::mail_delivery(format!("Email build error: {e}"))
    }
}

impl From<lettre::transport::smtp::Error> for CampusRateError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        CampusRateError::mail_delivery(format!("Email send error: {e}"))
    }
}

impl From<lettre::address::AddressError> for CampusRateError {
    fn from(e: lettre::address::AddressError) -> Self {
        CampusRateError::mail_delivery(format!("Invalid email address: {e}"))
    }
}

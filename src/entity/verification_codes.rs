//! 验证码实体
//!
//! 注册验证与密码重置的待处理状态，落库并带过期时间，
//! 替代进程内 Map，进程重启后仍然有效。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "verification_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub code: String,
    pub purpose: String,
    // 待注册请求的 JSON 负载（purpose = signup 时使用）
    pub payload: Option<String>,
    pub expires_at: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_verification_code(self) -> crate::models::auth::entities::VerificationCode {
        use crate::models::auth::entities::{CodePurpose, VerificationCode};
        use chrono::{DateTime, Utc};

        VerificationCode {
            id: self.id,
            email: self.email,
            code: self.code,
            purpose: self
                .purpose
                .parse::<CodePurpose>()
                .unwrap_or(CodePurpose::Signup),
            payload: self.payload,
            expires_at: DateTime::<Utc>::from_timestamp(self.expires_at, 0).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

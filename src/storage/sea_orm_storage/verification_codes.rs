use super::SeaOrmStorage;
use crate::entity::verification_codes::{ActiveModel, Column, Entity as VerificationCodes};
use crate::errors::{CampusRateError, Result};
use crate::models::auth::{
    entities::{CodePurpose, VerificationCode},
    requests::UpsertVerificationCodeRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 写入验证码记录：先清理同邮箱+用途的旧记录与全部过期记录，
    /// 再插入新记录
    pub async fn upsert_verification_code_impl(
        &self,
        record: UpsertVerificationCodeRequest,
    ) -> Result<VerificationCode> {
        self.purge_expired_verification_codes_impl().await?;

        VerificationCodes::delete_many()
            .filter(Column::Email.eq(record.email.as_str()))
            .filter(Column::Purpose.eq(record.purpose.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("清理旧验证码失败: {e}")))?;

        let model = ActiveModel {
            email: Set(record.email),
            code: Set(record.code),
            purpose: Set(record.purpose.to_string()),
            payload: Set(record.payload),
            expires_at: Set(record.expires_at.timestamp()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("写入验证码失败: {e}")))?;

        Ok(result.into_verification_code())
    }

    /// 查找未过期且匹配的验证码
    pub async fn find_valid_verification_code_impl(
        &self,
        email: &str,
        purpose: CodePurpose,
        code: &str,
    ) -> Result<Option<VerificationCode>> {
        let now = chrono::Utc::now().timestamp();

        let result = VerificationCodes::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Purpose.eq(purpose.to_string()))
            .filter(Column::Code.eq(code))
            .filter(Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询验证码失败: {e}")))?;

        Ok(result.map(|m| m.into_verification_code()))
    }

    /// 使用后删除验证码
    pub async fn consume_verification_code_impl(&self, id: i64) -> Result<bool> {
        let result = VerificationCodes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("删除验证码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 清理过期验证码
    pub async fn purge_expired_verification_codes_impl(&self) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = VerificationCodes::delete_many()
            .filter(Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("清理过期验证码失败: {e}")))?;

        Ok(result.rows_affected)
    }
}

use super::SeaOrmStorage;
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews};
use crate::errors::{CampusRateError, Result};
use crate::models::{
    PaginationInfo,
    reviews::{
        entities::{Review, ReviewReport, ReviewStatus, ReviewTarget},
        requests::{CreateReviewRecord, ReviewListQuery, UpdateReviewRecord},
        responses::ReviewListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

fn encode_usernames(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

fn encode_reports(list: &[ReviewReport]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

/// 目标联合体拆成判别列 + 引用列；未使用的引用列写 NULL，
/// 目标转换时旧引用随之清空
fn target_columns(target: &ReviewTarget) -> (String, Option<i64>, Option<i64>, Option<i64>) {
    match target {
        ReviewTarget::Course {
            course_id,
            department_id,
        } => (
            ReviewTarget::COURSE.to_string(),
            Some(*course_id),
            Some(*department_id),
            None,
        ),
        ReviewTarget::Professor { professor_id } => (
            ReviewTarget::PROFESSOR.to_string(),
            None,
            None,
            Some(*professor_id),
        ),
    }
}

impl SeaOrmStorage {
    /// 创建评价
    pub async fn create_review_impl(&self, req: CreateReviewRecord) -> Result<Review> {
        let now = chrono::Utc::now().timestamp();
        let (review_type, course_id, department_id, professor_id) = target_columns(&req.target);

        let model = ActiveModel {
            review_type: Set(review_type),
            course_id: Set(course_id),
            department_id: Set(department_id),
            professor_id: Set(professor_id),
            title: Set(req.title),
            rating: Set(req.rating),
            content: Set(req.content),
            author_id: Set(req.author_id),
            author_username: Set(req.author_username),
            upvotes: Set("[]".to_string()),
            downvotes: Set("[]".to_string()),
            status: Set(req.status.to_string()),
            reports: Set("[]".to_string()),
            report_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("创建评价失败: {e}")))?;

        Ok(result.into_review())
    }

    /// 通过 ID 获取评价
    pub async fn get_review_by_id_impl(&self, id: i64) -> Result<Option<Review>> {
        let result = Reviews::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 分页列出评价
    pub async fn list_reviews_with_pagination_impl(
        &self,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Reviews::find();

        if let Some(course_id) = query.course_id {
            select = select
                .filter(Column::ReviewType.eq(ReviewTarget::COURSE))
                .filter(Column::CourseId.eq(course_id));
        }

        if let Some(professor_id) = query.professor_id {
            select = select
                .filter(Column::ReviewType.eq(ReviewTarget::PROFESSOR))
                .filter(Column::ProfessorId.eq(professor_id));
        }

        if let Some(author_id) = query.author_id {
            select = select.filter(Column::AuthorId.eq(author_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 非管理员可见性：已通过的评价，或自己的评价
        if let Some(viewer_id) = query.visible_to_author_id {
            select = select.filter(
                Condition::any()
                    .add(Column::Status.eq(ReviewStatus::Approved.to_string()))
                    .add(Column::AuthorId.eq(viewer_id)),
            );
        }

        // 举报队列：只取被举报过的，按举报数倒序
        if query.reported_only {
            select = select
                .filter(Column::ReportCount.gt(0))
                .order_by_desc(Column::ReportCount);
        } else {
            select = select.order_by_desc(Column::CreatedAt);
        }

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询评价总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询评价页数失败: {e}")))?;

        let reviews = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询评价列表失败: {e}")))?;

        Ok(ReviewListResponse {
            items: reviews.into_iter().map(|m| m.into_review()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新评价内容与目标（目标列整体替换）
    pub async fn update_review_impl(
        &self,
        id: i64,
        update: UpdateReviewRecord,
    ) -> Result<Option<Review>> {
        let existing = self.get_review_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let (review_type, course_id, department_id, professor_id) = target_columns(&update.target);

        let model = ActiveModel {
            id: Set(id),
            review_type: Set(review_type),
            course_id: Set(course_id),
            department_id: Set(department_id),
            professor_id: Set(professor_id),
            title: Set(update.title),
            rating: Set(update.rating),
            content: Set(update.content),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新评价失败: {e}")))?;

        self.get_review_by_id_impl(id).await
    }

    /// 更新评价状态
    pub async fn update_review_status_impl(
        &self,
        id: i64,
        status: ReviewStatus,
    ) -> Result<Option<Review>> {
        let existing = self.get_review_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新评价状态失败: {e}")))?;

        self.get_review_by_id_impl(id).await
    }

    /// 更新投票集合：两个集合同条 UPDATE 写入
    pub async fn update_review_votes_impl(
        &self,
        id: i64,
        upvotes: &[String],
        downvotes: &[String],
    ) -> Result<bool> {
        let result = Reviews::update_many()
            .col_expr(
                Column::Upvotes,
                sea_orm::sea_query::Expr::value(encode_usernames(upvotes)),
            )
            .col_expr(
                Column::Downvotes,
                sea_orm::sea_query::Expr::value(encode_usernames(downvotes)),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新评价投票失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新举报列表；report_count 与列表长度同条 UPDATE 保持一致
    pub async fn update_review_reports_impl(
        &self,
        id: i64,
        reports: &[ReviewReport],
    ) -> Result<bool> {
        let result = Reviews::update_many()
            .col_expr(
                Column::Reports,
                sea_orm::sea_query::Expr::value(encode_reports(reports)),
            )
            .col_expr(
                Column::ReportCount,
                sea_orm::sea_query::Expr::value(reports.len() as i32),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新评价举报失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除评价
    pub async fn delete_review_impl(&self, id: i64) -> Result<bool> {
        let result = Reviews::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计评价数量
    pub async fn count_reviews_impl(&self) -> Result<u64> {
        let count = Reviews::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("统计评价数量失败: {e}")))?;

        Ok(count)
    }

    /// 按状态统计评价数量
    pub async fn count_reviews_by_status_impl(&self, status: ReviewStatus) -> Result<u64> {
        let count = Reviews::find()
            .filter(Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("统计评价数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计被举报评价数量
    pub async fn count_reported_reviews_impl(&self) -> Result<u64> {
        let count = Reviews::find()
            .filter(Column::ReportCount.gt(0))
            .count(&self.db)
            .await
            .map_err(|e| {
                CampusRateError::database_operation(format!("统计被举报评价失败: {e}"))
            })?;

        Ok(count)
    }

    /// 统计某课程的评价数量
    pub async fn count_reviews_for_course_impl(&self, course_id: i64) -> Result<u64> {
        let count = Reviews::find()
            .filter(Column::ReviewType.eq(ReviewTarget::COURSE))
            .filter(Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                CampusRateError::database_operation(format!("统计课程评价数失败: {e}"))
            })?;

        Ok(count)
    }
}

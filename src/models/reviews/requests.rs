use super::entities::{ReviewStatus, ReviewTarget};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 评价创建请求。目标为带标签联合体，课程评价必须同时携带课程与院系。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct CreateReviewRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub target: ReviewTarget,
    pub rating: i32,
    pub content: String,
}

// 评价编辑请求。携带 target 时执行显式的目标转换。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct UpdateReviewRequest {
    #[serde(flatten)]
    pub target: Option<ReviewTarget>,
    pub rating: Option<i32>,
    pub content: Option<String>,
}

// 举报请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReportReviewRequest {
    pub reason: String,
    pub details: Option<String>,
}

// 评价查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(
        default,
        deserialize_with = "crate::models::common::pagination::deserialize_optional_i64"
    )]
    pub course_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::models::common::pagination::deserialize_optional_i64"
    )]
    pub professor_id: Option<i64>,
    pub status: Option<ReviewStatus>,
}

// 存储层创建记录：服务层完成引用校验、内容审核、标题生成与作者
// 身份标记之后构建
#[derive(Debug, Clone)]
pub struct CreateReviewRecord {
    pub target: ReviewTarget,
    pub title: String,
    pub rating: i32,
    pub content: String,
    pub author_id: i64,
    pub author_username: String,
    pub status: ReviewStatus,
}

// 存储层更新记录：目标转换后的完整字段集，旧目标引用被整体替换
#[derive(Debug, Clone)]
pub struct UpdateReviewRecord {
    pub target: ReviewTarget,
    pub title: String,
    pub rating: i32,
    pub content: String,
}

// 评价列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub professor_id: Option<i64>,
    pub author_id: Option<i64>,
    pub status: Option<ReviewStatus>,
    // 只取 report_count > 0 的记录并按其倒序（管理端举报队列）
    pub reported_only: bool,
    // 非管理员的可见性约束：approved 或自己的记录
    pub visible_to_author_id: Option<i64>,
}

use super::entities::Review;
use crate::models::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewResponse {
    pub review: Review,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListResponse {
    pub items: Vec<Review>,
    pub pagination: PaginationInfo,
}

// 投票结果：返回最新集合基数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct VoteResponse {
    pub upvotes: usize,
    pub downvotes: usize,
}

// 举报结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReportResponse {
    pub report_count: i32,
}

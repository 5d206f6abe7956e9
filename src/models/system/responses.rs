use serde::Serialize;
use ts_rs::TS;

// 管理端统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct AdminStatsResponse {
    pub users: u64,
    pub departments: u64,
    pub courses: u64,
    pub professors: u64,
    pub reviews: u64,
    pub pending_reviews: u64,
    pub reported_reviews: u64,
}

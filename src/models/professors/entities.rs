use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教授实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct Professor {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub office: Option<String>,
    pub office_hours: Option<String>,
    // 所属院系（至少一个）
    pub department_ids: Vec<i64>,
    // 任教课程（可选）
    pub course_ids: Vec<i64>,
    // 派生值：已通过评价的算术平均分，保留一位小数；无评价时为 0。
    // 只由评分聚合器写入。
    pub avg_rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

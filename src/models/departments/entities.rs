use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 院系实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct Department {
    pub id: i64,
    pub name: String,
    // 大写短码，如 CS、MATH
    pub code: String,
    pub description: Option<String>,
    pub faculty: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

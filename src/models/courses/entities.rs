use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub department_id: i64,
    // 院系内唯一的课程编号，如 "101"、"15213"
    pub course_number: String,
    pub name: String,
    pub credit_hours: Option<i32>,
    pub description: Option<String>,
    // 前置/同修课程编号，无序字符串引用
    pub prerequisites: Vec<String>,
    pub corequisites: Vec<String>,
    pub syllabus: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

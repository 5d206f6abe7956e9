use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub department_id: i64,
    pub course_number: String,
    pub name: String,
    pub credit_hours: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub corequisites: Vec<String>,
    pub syllabus: Option<String>,
}

// 课程更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub department_id: Option<i64>,
    pub course_number: Option<String>,
    pub name: Option<String>,
    pub credit_hours: Option<i32>,
    pub description: Option<String>,
    pub prerequisites: Option<Vec<String>>,
    pub corequisites: Option<Vec<String>>,
    pub syllabus: Option<String>,
}

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(
        default,
        deserialize_with = "crate::models::common::pagination::deserialize_optional_i64"
    )]
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

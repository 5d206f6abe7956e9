use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

fn default_title() -> String {
    "Professor".to_string()
}

// 教授创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct CreateProfessorRequest {
    pub name: String,
    #[serde(default = "default_title")]
    pub title: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub office: Option<String>,
    pub office_hours: Option<String>,
    pub department_ids: Vec<i64>,
    #[serde(default)]
    pub course_ids: Vec<i64>,
}

// 教授更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct UpdateProfessorRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub office: Option<String>,
    pub office_hours: Option<String>,
    pub department_ids: Option<Vec<i64>>,
    pub course_ids: Option<Vec<i64>>,
}

// 教授查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorListParams {
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

// 教授列表查询参数（用于存储层）
#[derive(Debug, Clone, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

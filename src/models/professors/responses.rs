use super::entities::Professor;
use crate::models::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorResponse {
    pub professor: Professor,
}

// 教授详情，附带已通过评价数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorDetailResponse {
    pub professor: Professor,
    pub review_count: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorListResponse {
    pub items: Vec<Professor>,
    pub pagination: PaginationInfo,
}

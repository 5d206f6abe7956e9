use crate::models::courses::entities::Course;
use crate::models::departments::entities::Department;
use crate::models::professors::entities::Professor;
use serde::Serialize;
use ts_rs::TS;

// 搜索结果：命中的实体分组返回
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchResponse {
    pub departments: Vec<Department>,
    pub courses: Vec<Course>,
    pub professors: Vec<Professor>,
}

// 建议条目的实体类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub enum SuggestionEntityType {
    Department,
    Course,
    Professor,
}

// 输入联想的单条建议
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct Suggestion {
    pub id: i64,
    pub display_text: String,
    pub subtext: String,
    pub entity_type: SuggestionEntityType,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

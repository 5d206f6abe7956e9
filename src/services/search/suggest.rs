use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::query::{SearchPlan, parse_query};
use super::{
    SUGGEST_COURSE_LIMIT, SUGGEST_DEPARTMENT_LIMIT, SUGGEST_PROFESSOR_LIMIT, SearchService,
};
use crate::models::search::responses::{Suggestion, SuggestionEntityType, SuggestionsResponse};
use crate::models::{ApiResponse, ErrorCode, search::requests::SearchParams};

/// 输入联想：跨三类实体取一个有界、排序、去重的建议列表。
/// 与完整搜索不同，这里不做规则回退——增量输入时各类命中都展示。
pub async fn suggestions(
    service: &SearchService,
    params: SearchParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut suggestions: Vec<Suggestion> = Vec::new();

    let result: Result<(), crate::errors::CampusRateError> = async {
        let plan = parse_query(&params.q);

        match plan {
            SearchPlan::Empty => {}
            SearchPlan::CodeAndNumber { code, number } => {
                if let Some(department) = storage.get_department_by_code(&code).await? {
                    let courses = storage
                        .find_courses_by_number_prefix(
                            Some(department.id),
                            &number,
                            SUGGEST_COURSE_LIMIT,
                        )
                        .await?;
                    for course in courses {
                        suggestions.push(Suggestion {
                            id: course.id,
                            display_text: format!(
                                "{} {} - {}",
                                department.code, course.course_number, course.name
                            ),
                            subtext: department.name.clone(),
                            entity_type: SuggestionEntityType::Course,
                        });
                    }
                }
            }
            SearchPlan::Single { raw } => {
                // 院系：短码精确 + 名称子串
                let mut departments = Vec::new();
                if let Some(department) =
                    storage.get_department_by_code(&raw.to_uppercase()).await?
                {
                    departments.push(department);
                }
                for department in storage
                    .find_departments_by_name(&raw, SUGGEST_DEPARTMENT_LIMIT)
                    .await?
                {
                    if !departments.iter().any(|d| d.id == department.id) {
                        departments.push(department);
                    }
                }
                departments.truncate(SUGGEST_DEPARTMENT_LIMIT as usize);

                for department in &departments {
                    suggestions.push(Suggestion {
                        id: department.id,
                        display_text: format!("{} - {}", department.code, department.name),
                        subtext: department
                            .faculty
                            .clone()
                            .unwrap_or_else(|| "Department".to_string()),
                        entity_type: SuggestionEntityType::Department,
                    });
                }

                // 课程：纯数字走编号前缀，否则名称子串
                let courses = if raw.chars().all(|c| c.is_ascii_digit()) {
                    storage
                        .find_courses_by_number_prefix(None, &raw, SUGGEST_COURSE_LIMIT)
                        .await?
                } else {
                    storage
                        .find_courses_by_name(&raw, SUGGEST_COURSE_LIMIT)
                        .await?
                };
                for course in courses {
                    let subtext = match storage.get_department_by_id(course.department_id).await? {
                        Some(department) => department.code,
                        None => "Course".to_string(),
                    };
                    suggestions.push(Suggestion {
                        id: course.id,
                        display_text: format!("{} - {}", course.course_number, course.name),
                        subtext,
                        entity_type: SuggestionEntityType::Course,
                    });
                }

                // 教授：纯数字的查询没有联想意义
                if !raw.chars().all(|c| c.is_ascii_digit()) {
                    let professors = storage
                        .find_professors_by_name(&raw, SUGGEST_PROFESSOR_LIMIT)
                        .await?;
                    for professor in professors {
                        suggestions.push(Suggestion {
                            id: professor.id,
                            display_text: professor.name,
                            subtext: professor.title,
                            entity_type: SuggestionEntityType::Professor,
                        });
                    }
                }
            }
        }
        Ok(())
    }
    .await;

    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuggestionsResponse { suggestions },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Suggestions failed: {e}"),
            )),
        ),
    }
}

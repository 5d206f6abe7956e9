use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SEARCH_LIMIT, SearchService};
use crate::models::search::responses::SearchResponse;
use crate::models::{ApiResponse, ErrorCode, search::requests::SearchParams};

/// 归一化后的查询计划。
/// 带空格的"院系码 + 数字"组合走课程编号前缀匹配；
/// 其余情况作为单 token 按固定回退顺序解释。
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPlan {
    Empty,
    // "CS 101" 形式：院系短码精确匹配 + 课程编号前缀
    CodeAndNumber { code: String, number: String },
    // 单 token：裸院系码 / 裸课程编号 / 自由文本
    Single { raw: String },
}

/// 查询归一化：去首尾空白；空格分隔且右侧为纯数字时拆为
/// (院系码, 编号前缀)，否则整体作为单 token
pub fn parse_query(q: &str) -> SearchPlan {
    let trimmed = q.trim();
    if trimmed.is_empty() {
        return SearchPlan::Empty;
    }

    if let Some((left, right)) = trimmed.split_once(char::is_whitespace) {
        let code = left.trim().to_uppercase();
        let number = right.trim().to_string();
        if !code.is_empty() && !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
            return SearchPlan::CodeAndNumber { code, number };
        }
    }

    SearchPlan::Single {
        raw: trimmed.to_string(),
    }
}

pub async fn search(
    service: &SearchService,
    params: SearchParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut response = SearchResponse::default();

    let result: Result<(), crate::errors::CampusRateError> = async {
        match parse_query(&params.q) {
            SearchPlan::Empty => {}
            SearchPlan::CodeAndNumber { code, number } => {
                // 院系短码精确解析，再取该院系内编号前缀命中的课程
                if let Some(department) = storage.get_department_by_code(&code).await? {
                    response.courses = storage
                        .find_courses_by_number_prefix(Some(department.id), &number, SEARCH_LIMIT)
                        .await?;
                    response.departments.push(department);
                }
            }
            SearchPlan::Single { raw } => {
                // 规则一：院系命中（短码精确 / 名称子串），优先级最高
                if let Some(department) =
                    storage.get_department_by_code(&raw.to_uppercase()).await?
                {
                    response.departments.push(department);
                }
                for department in storage.find_departments_by_name(&raw, SEARCH_LIMIT).await? {
                    if !response.departments.iter().any(|d| d.id == department.id) {
                        response.departments.push(department);
                    }
                }

                if response.departments.is_empty() {
                    if raw.chars().all(|c| c.is_ascii_digit()) {
                        // 规则二：裸课程编号前缀
                        response.courses = storage
                            .find_courses_by_number_prefix(None, &raw, SEARCH_LIMIT)
                            .await?;
                    }

                    if response.courses.is_empty() {
                        // 规则三：课程名/教授名/头衔自由文本
                        response.courses =
                            storage.find_courses_by_name(&raw, SEARCH_LIMIT).await?;
                        response.professors =
                            storage.find_professors_by_name(&raw, SEARCH_LIMIT).await?;
                    }
                }
            }
        }
        Ok(())
    }
    .await;

    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Search failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(parse_query(""), SearchPlan::Empty);
        assert_eq!(parse_query("   "), SearchPlan::Empty);
    }

    #[test]
    fn test_code_and_number_split() {
        assert_eq!(
            parse_query("cs 101"),
            SearchPlan::CodeAndNumber {
                code: "CS".to_string(),
                number: "101".to_string()
            }
        );
        assert_eq!(
            parse_query("  MATH 2 "),
            SearchPlan::CodeAndNumber {
                code: "MATH".to_string(),
                number: "2".to_string()
            }
        );
    }

    #[test]
    fn test_space_with_non_numeric_right_is_free_text() {
        // "intro programming" 不是 码+数字 组合
        assert_eq!(
            parse_query("intro programming"),
            SearchPlan::Single {
                raw: "intro programming".to_string()
            }
        );
    }

    #[test]
    fn test_single_token() {
        assert_eq!(
            parse_query("CS"),
            SearchPlan::Single {
                raw: "CS".to_string()
            }
        );
        assert_eq!(
            parse_query("15213"),
            SearchPlan::Single {
                raw: "15213".to_string()
            }
        );
    }
}

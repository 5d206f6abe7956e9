use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{
        entities::{ReviewStatus, ReviewTarget},
        requests::{CreateReviewRecord, CreateReviewRequest},
        responses::ReviewResponse,
    },
};
use crate::services::professors::rating::recompute_professor_rating;
use crate::storage::Storage;
use crate::utils::content_policy;
use crate::utils::validate::validate_rating;

/// 校验评价目标引用并生成展示标题。
/// 课程评价要求课程存在且属于指定院系；教授评价要求教授存在。
pub(super) async fn validate_target_and_build_title(
    storage: &Arc<dyn Storage>,
    target: &ReviewTarget,
) -> Result<String, HttpResponse> {
    match target {
        ReviewTarget::Course {
            course_id,
            department_id,
        } => {
            let department = match storage.get_department_by_id(*department_id).await {
                Ok(Some(department)) => department,
                Ok(None) => {
                    return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::DepartmentNotFound,
                        "Department not found",
                    )));
                }
                Err(e) => {
                    return Err(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to check department: {e}"),
                        ),
                    ));
                }
            };

            let course = match storage.get_course_by_id(*course_id).await {
                Ok(Some(course)) => course,
                Ok(None) => {
                    return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::CourseNotFound,
                        "Course not found",
                    )));
                }
                Err(e) => {
                    return Err(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to check course: {e}"),
                        ),
                    ));
                }
            };

            // 课程必须属于提交的院系
            if course.department_id != department.id {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::CourseDepartmentMismatch,
                    "Course does not belong to the given department",
                )));
            }

            Ok(format!(
                "{} {} - {}",
                department.code, course.course_number, course.name
            ))
        }
        ReviewTarget::Professor { professor_id } => {
            match storage.get_professor_by_id(*professor_id).await {
                Ok(Some(professor)) => Ok(format!("{} ({})", professor.name, professor.title)),
                Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ProfessorNotFound,
                    "Professor not found",
                ))),
                Err(e) => Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check professor: {e}"),
                    )),
                ),
            }
        }
    }
}

pub async fn create_review(
    service: &ReviewService,
    review_data: CreateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 认证中间件解析出的作者身份；所有权以稳定 ID 记录
    let author = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 评分范围
    if let Err(msg) = validate_rating(review_data.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingOutOfRange, msg)));
    }

    // 内容不能为空
    if review_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Review content is required",
        )));
    }

    // 内容审核
    if let Some(term) = content_policy().find_banned_term(&review_data.content) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InappropriateContent,
            format!("Review contains inappropriate content: {term}"),
        )));
    }

    let storage = service.get_storage(request);

    // 目标引用校验 + 标题生成
    let title = match validate_target_and_build_title(&storage, &review_data.target).await {
        Ok(title) => title,
        Err(response) => return Ok(response),
    };

    let record = CreateReviewRecord {
        target: review_data.target,
        title,
        rating: review_data.rating,
        content: review_data.content,
        author_id: author.id,
        author_username: author.username,
        // 新评价一律从 pending 进入审核队列
        status: ReviewStatus::Pending,
    };

    match storage.create_review(record).await {
        Ok(review) => {
            // 教授评价创建后重算平均分
            if let Some(professor_id) = review.target.professor_id() {
                recompute_professor_rating(&storage, professor_id).await;
            }

            Ok(HttpResponse::Created()
                .json(ApiResponse::success(ReviewResponse { review }, "评价提交成功，等待审核")))
        }
        Err(e) => {
            let msg = format!("Review creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

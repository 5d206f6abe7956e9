use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReviewService;
use super::create::validate_target_and_build_title;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{
        requests::{UpdateReviewRecord, UpdateReviewRequest},
        responses::ReviewResponse,
    },
};
use crate::services::professors::rating::recompute_professor_rating;
use crate::utils::content_policy;
use crate::utils::validate::validate_rating;

pub async fn update_review(
    service: &ReviewService,
    review_id: i64,
    update_data: UpdateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let author_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let storage = service.get_storage(request);

    let existing = match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "Review not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get review: {e}"),
                )),
            );
        }
    };

    // 所有权校验：比对认证身份的稳定 ID，不信任提交的用户名
    if existing.author_id != author_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ReviewPermissionDenied,
            "You can only edit your own review",
        )));
    }

    let rating = update_data.rating.unwrap_or(existing.rating);
    if let Err(msg) = validate_rating(rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingOutOfRange, msg)));
    }

    let content = update_data
        .content
        .unwrap_or_else(|| existing.content.clone());
    if content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Review content is required",
        )));
    }

    // 编辑后的内容同样过审核策略
    if let Some(term) = content_policy().find_banned_term(&content) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InappropriateContent,
            format!("Review contains inappropriate content: {term}"),
        )));
    }

    // 携带 target 时执行显式目标转换：旧引用清空、新引用校验、标题重新生成
    let target = update_data.target.unwrap_or(existing.target);
    let title = if target != existing.target {
        match validate_target_and_build_title(&storage, &target).await {
            Ok(title) => title,
            Err(response) => return Ok(response),
        }
    } else {
        existing.title.clone()
    };

    let record = UpdateReviewRecord {
        target,
        title,
        rating,
        content,
    };

    match storage.update_review(review_id, record).await {
        Ok(Some(review)) => {
            // 教授评价相关的编辑要重算平均分；换了教授时新旧两边都要算
            let old_professor = existing.target.professor_id();
            let new_professor = review.target.professor_id();
            if let Some(professor_id) = old_professor {
                recompute_professor_rating(&storage, professor_id).await;
            }
            if let Some(professor_id) = new_professor
                && old_professor != new_professor
            {
                recompute_professor_rating(&storage, professor_id).await;
            }

            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(ReviewResponse { review }, "评价更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => {
            let msg = format!("Review update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

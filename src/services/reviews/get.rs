use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{entities::ReviewStatus, responses::ReviewResponse},
    users::entities::UserRole,
};

pub async fn get_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let review = match storage.get_review_by_id(review_id).await {
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

    // 未通过的评价只有作者和管理员可见
    if review.status != ReviewStatus::Approved {
        let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
        let is_author = RequireJWT::extract_user_id(request) == Some(review.author_id);
        if !is_admin && !is_author {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "Review not found",
            )));
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(ReviewResponse { review }, "查询成功")))
}

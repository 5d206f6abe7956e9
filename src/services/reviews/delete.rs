use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::entities::UserRole,
};
use crate::services::professors::rating::recompute_professor_rating;

pub async fn delete_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

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

    // 作者或管理员可删除
    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
    if review.author_id != user_id && !is_admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ReviewPermissionDenied,
            "You can only delete your own review",
        )));
    }

    match storage.delete_review(review_id).await {
        Ok(true) => {
            // 删除教授评价后重算平均分
            if let Some(professor_id) = review.target.professor_id() {
                recompute_professor_rating(&storage, professor_id).await;
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Review deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Review deletion failed: {e}"),
            )),
        ),
    }
}

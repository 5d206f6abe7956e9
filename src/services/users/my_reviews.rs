use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::reviews::requests::{ReviewListParams, ReviewListQuery};
use crate::models::{ApiResponse, ErrorCode};

/// 当前用户的评价列表（任何状态都返回给作者本人）
pub async fn my_reviews(
    service: &UserService,
    params: ReviewListParams,
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

    let query = ReviewListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: params.course_id,
        professor_id: params.professor_id,
        author_id: Some(user_id),
        status: params.status,
        reported_only: false,
        visible_to_author_id: None,
    };

    match storage.list_reviews_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list reviews: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::requests::{ReviewListParams, ReviewListQuery},
    users::entities::UserRole,
};

pub async fn list_reviews(
    service: &ReviewService,
    params: ReviewListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 非管理员只能看到已通过的评价和自己的评价
    let visible_to_author_id = match RequireJWT::extract_user_role(request) {
        Some(UserRole::Admin) => None,
        _ => RequireJWT::extract_user_id(request),
    };

    let query = ReviewListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: params.course_id,
        professor_id: params.professor_id,
        author_id: None,
        status: params.status,
        reported_only: false,
        visible_to_author_id,
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

/// 管理端列表：任意状态可查，不做可见性过滤
pub async fn list_reviews_admin(
    service: &ReviewService,
    params: ReviewListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ReviewListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: params.course_id,
        professor_id: params.professor_id,
        author_id: None,
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

/// 举报队列：report_count > 0，按举报数倒序
pub async fn list_reported_reviews(
    service: &ReviewService,
    params: ReviewListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ReviewListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: None,
        professor_id: None,
        author_id: None,
        status: None,
        reported_only: true,
        visible_to_author_id: None,
    };

    match storage.list_reviews_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list reported reviews: {e}"),
            )),
        ),
    }
}

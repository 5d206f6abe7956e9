use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::entities::ReviewStatus;
use crate::models::reviews::requests::ReviewListParams;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{
    UpdateUserRoleRequest, UpdateUserStatusRequest, UserListParams,
};
use crate::services::{ReviewService, SystemService, UserService};
use crate::utils::{SafeIDI64, SafeReviewIdI64};

// 懒加载的全局服务实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// HTTP处理程序
pub async fn stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.admin_stats(&req).await
}

pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn update_user_status(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserStatusRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user_status(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_user_role(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRoleRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user_role(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn list_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListParams>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .list_reviews_admin(query.into_inner(), &req)
        .await
}

pub async fn list_reported_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListParams>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .list_reported_reviews(query.into_inner(), &req)
        .await
}

pub async fn approve_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .moderate_review(review_id.0, ReviewStatus::Approved, &req)
        .await
}

pub async fn reject_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .moderate_review(review_id.0, ReviewStatus::Rejected, &req)
        .await
}

// 配置路由：整个管理面要求管理员
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/stats", web::get().to(stats))
            .route("/users", web::get().to(list_users))
            .route("/users/{id}/status", web::put().to(update_user_status))
            .route("/users/{id}/role", web::put().to(update_user_role))
            .route("/reviews", web::get().to(list_reviews))
            .route("/reviews/reported", web::get().to(list_reported_reviews))
            .route("/reviews/{id}/approve", web::post().to(approve_review))
            .route("/reviews/{id}/reject", web::post().to(reject_review)),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{
    CreateReviewRequest, ReportReviewRequest, ReviewListParams, UpdateReviewRequest,
};
use crate::services::ReviewService;
use crate::services::reviews::VoteKind;
use crate::utils::SafeReviewIdI64;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// HTTP处理程序
pub async fn list_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListParams>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_reviews(query.into_inner(), &req).await
}

pub async fn get_review(req: HttpRequest, review_id: SafeReviewIdI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_review(review_id.0, &req).await
}

pub async fn create_review(
    req: HttpRequest,
    review_data: web::Json<CreateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .create_review(review_data.into_inner(), &req)
        .await
}

pub async fn update_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
    update_data: web::Json<UpdateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .update_review(review_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.delete_review(review_id.0, &req).await
}

pub async fn upvote_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .vote_review(review_id.0, VoteKind::Up, &req)
        .await
}

pub async fn downvote_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .vote_review(review_id.0, VoteKind::Down, &req)
        .await
}

pub async fn report_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
    report_data: web::Json<ReportReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .report_review(review_id.0, report_data.into_inner(), &req)
        .await
}

// 配置路由：整个评价面都要求登录
pub fn configure_reviews_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_reviews))
            .route("/{id}", web::get().to(get_review))
            .route("/{id}", web::put().to(update_review))
            .route("/{id}", web::delete().to(delete_review))
            .route("/{id}/upvote", web::post().to(upvote_review))
            .route("/{id}/downvote", web::post().to(downvote_review))
            .service(
                // 提交与举报走写入限流
                web::scope("")
                    .wrap(middlewares::RateLimit::review_write())
                    .route("", web::post().to(create_review))
                    .route("/{id}/report", web::post().to(report_review)),
            ),
    );
}

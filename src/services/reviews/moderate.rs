use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ReviewService;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{entities::ReviewStatus, responses::ReviewResponse},
};
use crate::services::professors::rating::recompute_professor_rating;

/// 审核通过/驳回。路由层已经套了管理员角色门。
///
/// 幂等：重复设置同一状态是空转换。不提供回退到 pending 的转换。
/// 教授评价的每一次状态变更之后都显式触发评分聚合器——聚合器只统计
/// approved 评价，漏触发会让平均分与实际脱节。
pub async fn moderate_review(
    service: &ReviewService,
    review_id: i64,
    status: ReviewStatus,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 审核只接受两个终态
    if status == ReviewStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Reviews cannot be moved back to pending",
        )));
    }

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

    // 空转换：状态已经是目标值，直接返回当前记录
    if existing.status == status {
        info!(
            "Review {} already has status {}, no-op transition",
            review_id, status
        );
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReviewResponse { review: existing },
            "状态未变更",
        )));
    }

    match storage.update_review_status(review_id, status).await {
        Ok(Some(review)) => {
            // 状态变更可能改变"已通过集合"，教授评价必须重算
            if let Some(professor_id) = review.target.professor_id() {
                recompute_professor_rating(&storage, professor_id).await;
            }

            let message = match status {
                ReviewStatus::Approved => "评价已通过",
                ReviewStatus::Rejected => "评价已驳回",
                ReviewStatus::Pending => unreachable!(),
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(ReviewResponse { review }, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update review status: {e}"),
            )),
        ),
    }
}

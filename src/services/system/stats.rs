use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::reviews::entities::ReviewStatus;
use crate::models::system::responses::AdminStatsResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 管理端总览：各实体数量 + 审核/举报队列长度
pub async fn admin_stats(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: Result<AdminStatsResponse, crate::errors::CampusRateError> = async {
        Ok(AdminStatsResponse {
            users: storage.count_users().await?,
            departments: storage.count_departments().await?,
            courses: storage.count_courses().await?,
            professors: storage.count_professors().await?,
            reviews: storage.count_reviews().await?,
            pending_reviews: storage
                .count_reviews_by_status(ReviewStatus::Pending)
                .await?,
            reported_reviews: storage.count_reported_reviews().await?,
        })
    }
    .await;

    match result {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load stats: {e}"),
            )),
        ),
    }
}

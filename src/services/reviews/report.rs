use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    reviews::{
        entities::ReviewReport,
        requests::ReportReviewRequest,
        responses::ReportResponse,
    },
};

pub async fn report_review(
    service: &ReviewService,
    review_id: i64,
    report_data: ReportReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let reporter = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if report_data.reason.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Report reason is required",
        )));
    }

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

    // 同一用户对同一评价只能举报一次
    if review.has_report_from(&reporter.username) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadyReported,
            "You have already reported this review",
        )));
    }

    let mut reports = review.reports;
    reports.push(ReviewReport {
        reporter: reporter.username,
        reason: report_data.reason,
        details: report_data.details,
    });

    // report_count 与举报列表在同一条 UPDATE 中写入
    match storage.update_review_reports(review_id, &reports).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReportResponse {
                report_count: reports.len() as i32,
            },
            "举报已受理",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "Review not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to report review: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::reviews::entities::{Review, ReviewReport, ReviewStatus, ReviewTarget};

    fn review_with_reports(reports: Vec<ReviewReport>) -> Review {
        Review {
            id: 1,
            target: ReviewTarget::Professor { professor_id: 1 },
            title: "Prof (Professor)".to_string(),
            rating: 4,
            content: "solid lectures".to_string(),
            author_id: 10,
            author_username: "author1".to_string(),
            upvotes: vec![],
            downvotes: vec![],
            status: ReviewStatus::Approved,
            report_count: reports.len() as i32,
            reports,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_duplicate_reporter_detected() {
        let review = review_with_reports(vec![ReviewReport {
            reporter: "alice".to_string(),
            reason: "spam".to_string(),
            details: None,
        }]);
        assert!(review.has_report_from("alice"));
        assert!(!review.has_report_from("bob"));
    }

    #[test]
    fn test_report_count_matches_len() {
        let review = review_with_reports(vec![
            ReviewReport {
                reporter: "alice".to_string(),
                reason: "spam".to_string(),
                details: None,
            },
            ReviewReport {
                reporter: "bob".to_string(),
                reason: "offensive".to_string(),
                details: Some("second paragraph".to_string()),
            },
        ]);
        assert_eq!(review.report_count as usize, review.reports.len());
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{
    ApiResponse, ErrorCode,
    professors::responses::ProfessorDetailResponse,
};

pub async fn get_professor(
    service: &ProfessorService,
    professor_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let professor = match storage.get_professor_by_id(professor_id).await {
        Ok(Some(professor)) => professor,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProfessorNotFound,
                "Professor not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get professor: {e}"),
                )),
            );
        }
    };

    let review_count = storage
        .count_approved_reviews_for_professor(professor_id)
        .await
        .unwrap_or(0);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ProfessorDetailResponse {
            professor,
            review_count,
        },
        "查询成功",
    )))
}

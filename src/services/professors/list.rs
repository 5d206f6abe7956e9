use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{
    ApiResponse, ErrorCode,
    professors::requests::{ProfessorListParams, ProfessorListQuery},
};

pub async fn list_professors(
    service: &ProfessorService,
    params: ProfessorListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ProfessorListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        department_id: params.department_id,
        search: params.search,
    };

    match storage.list_professors_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list professors: {e}"),
            )),
        ),
    }
}

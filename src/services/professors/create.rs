use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProfessorService;
use crate::models::{
    ApiResponse, ErrorCode,
    professors::{requests::CreateProfessorRequest, responses::ProfessorResponse},
};

pub async fn create_professor(
    service: &ProfessorService,
    professor_data: CreateProfessorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if professor_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Professor name is required",
        )));
    }

    // 至少属于一个院系
    if professor_data.department_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Professor must belong to at least one department",
        )));
    }

    let storage = service.get_storage(request);

    // 所有院系必须存在
    for department_id in &professor_data.department_ids {
        match storage.get_department_by_id(*department_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentNotFound,
                    format!("Department {department_id} not found"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check department: {e}"),
                    )),
                );
            }
        }
    }

    // 同名教授不能重复建档在同一院系
    match storage
        .professor_name_exists_in_departments(
            professor_data.name.trim(),
            &professor_data.department_ids,
            None,
        )
        .await
    {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ProfessorAlreadyExists,
                "A professor with this name already exists in one of these departments",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check professor name: {e}"),
                )),
            );
        }
    }

    match storage.create_professor(professor_data).await {
        Ok(professor) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ProfessorResponse { professor },
            "教授创建成功",
        ))),
        Err(e) => {
            let msg = format!("Professor creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ProfessorAlreadyExists,
                    "Professor email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

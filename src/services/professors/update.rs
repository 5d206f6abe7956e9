use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProfessorService;
use crate::models::{
    ApiResponse, ErrorCode,
    professors::{requests::UpdateProfessorRequest, responses::ProfessorResponse},
};

pub async fn update_professor(
    service: &ProfessorService,
    professor_id: i64,
    update_data: UpdateProfessorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_professor_by_id(professor_id).await {
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

    // 变更院系时校验每个院系存在且不能为空
    if let Some(ref department_ids) = update_data.department_ids {
        if department_ids.is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Professor must belong to at least one department",
            )));
        }
        for department_id in department_ids {
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
    }

    // 改名或改院系后仍需保证同院系内无同名教授
    let name = update_data
        .name
        .clone()
        .unwrap_or_else(|| existing.name.clone());
    let department_ids = update_data
        .department_ids
        .clone()
        .unwrap_or_else(|| existing.department_ids.clone());

    if update_data.name.is_some() || update_data.department_ids.is_some() {
        match storage
            .professor_name_exists_in_departments(name.trim(), &department_ids, Some(professor_id))
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
    }

    match storage.update_professor(professor_id, update_data).await {
        Ok(Some(professor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfessorResponse { professor },
            "教授更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfessorNotFound,
            "Professor not found",
        ))),
        Err(e) => {
            let msg = format!("Professor update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::{requests::UpdateDepartmentRequest, responses::DepartmentResponse},
};
use crate::utils::validate::validate_department_code;

pub async fn update_department(
    service: &DepartmentService,
    department_id: i64,
    update_data: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 短码变更时校验格式并查冲突
    if let Some(ref code) = update_data.code {
        let code = code.trim().to_uppercase();
        if let Err(msg) = validate_department_code(&code) {
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
            );
        }

        match storage.get_department_by_code(&code).await {
            Ok(Some(existing)) if existing.id != department_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentAlreadyExists,
                    "Department code already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check department code: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_department(department_id, update_data).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentResponse { department },
            "院系更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => {
            let msg = format!("Department update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentAlreadyExists,
                    "Department name or code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

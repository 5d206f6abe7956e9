use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::{requests::CreateDepartmentRequest, responses::DepartmentResponse},
};
use crate::utils::validate::validate_department_code;

pub async fn create_department(
    service: &DepartmentService,
    department_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 名称不能为空
    if department_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Department name is required",
        )));
    }

    // 短码格式校验
    let code = department_data.code.trim().to_uppercase();
    if let Err(msg) = validate_department_code(&code) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    // 先查短码冲突给出明确错误，唯一索引兜底
    match storage.get_department_by_code(&code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DepartmentAlreadyExists,
                "Department code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check department code: {e}"),
                )),
            );
        }
    }

    match storage.create_department(department_data).await {
        Ok(department) => Ok(HttpResponse::Created().json(ApiResponse::success(
            DepartmentResponse { department },
            "院系创建成功",
        ))),
        Err(e) => {
            let msg = format!("Department creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
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

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::users::requests::{UpdateUserRequest, UpdateUserRoleRequest};
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 管理端变更用户角色。
/// 与状态端点同一条保护规则：管理员账号不可被变更。
pub async fn update_user_role(
    service: &UserService,
    user_id: i64,
    update_data: UpdateUserRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let target = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get user: {e}"),
                )),
            );
        }
    };

    if target.is_admin() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::UserProtected,
            "Admin accounts cannot be modified through this endpoint",
        )));
    }

    let update = UpdateUserRequest {
        email: None,
        password: None,
        role: Some(update_data.role.clone()),
        status: None,
    };

    match storage.update_user(user_id, update).await {
        Ok(Some(user)) => {
            info!(
                "User {} role changed to {}",
                user.username, update_data.role
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "角色已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update user role: {e}"),
            )),
        ),
    }
}

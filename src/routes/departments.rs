use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::DepartmentService;
use crate::utils::SafeDepartmentIdI64;

// 懒加载的全局 DepartmentService 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

// HTTP处理程序
pub async fn list_departments(
    req: HttpRequest,
    query: web::Query<DepartmentListParams>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_departments(query.into_inner(), &req)
        .await
}

pub async fn get_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.get_department(department_id.0, &req).await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(department_data.into_inner(), &req)
        .await
}

pub async fn update_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(department_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .delete_department(department_id.0, &req)
        .await
}

// 配置路由：读公开，写需要管理员
pub fn configure_departments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/departments")
            .route("", web::get().to(list_departments))
            .route("/{id}", web::get().to(get_department))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_department))
                    .route("/{id}", web::put().to(update_department))
                    .route("/{id}", web::delete().to(delete_department)),
            ),
    );
}

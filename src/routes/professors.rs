use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::professors::requests::{
    CreateProfessorRequest, ProfessorListParams, UpdateProfessorRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ProfessorService;
use crate::utils::SafeProfessorIdI64;

// 懒加载的全局 ProfessorService 实例
static PROFESSOR_SERVICE: Lazy<ProfessorService> = Lazy::new(ProfessorService::new_lazy);

// HTTP处理程序
pub async fn list_professors(
    req: HttpRequest,
    query: web::Query<ProfessorListParams>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .list_professors(query.into_inner(), &req)
        .await
}

pub async fn get_professor(
    req: HttpRequest,
    professor_id: SafeProfessorIdI64,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.get_professor(professor_id.0, &req).await
}

pub async fn create_professor(
    req: HttpRequest,
    professor_data: web::Json<CreateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_professor(professor_data.into_inner(), &req)
        .await
}

pub async fn update_professor(
    req: HttpRequest,
    professor_id: SafeProfessorIdI64,
    update_data: web::Json<UpdateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .update_professor(professor_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_professor(
    req: HttpRequest,
    professor_id: SafeProfessorIdI64,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .delete_professor(professor_id.0, &req)
        .await
}

// 配置路由：读公开，写需要管理员
pub fn configure_professors_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/professors")
            .route("", web::get().to(list_professors))
            .route("/{id}", web::get().to(get_professor))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_professor))
                    .route("/{id}", web::put().to(update_professor))
                    .route("/{id}", web::delete().to(delete_professor)),
            ),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::ReviewListParams;
use crate::models::users::requests::UpdateProfileRequest;
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn get_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_profile(&req).await
}

pub async fn update_profile(
    req: HttpRequest,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_profile(update_data.into_inner(), &req)
        .await
}

pub async fn my_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.my_reviews(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::put().to(update_profile))
            .route("/reviews", web::get().to(my_reviews)),
    );
}

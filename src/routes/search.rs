use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::search::requests::SearchParams;
use crate::services::SearchService;

// 懒加载的全局 SearchService 实例
static SEARCH_SERVICE: Lazy<SearchService> = Lazy::new(SearchService::new_lazy);

// HTTP处理程序
pub async fn search(
    req: HttpRequest,
    query: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    SEARCH_SERVICE.search(query.into_inner(), &req).await
}

pub async fn suggestions(
    req: HttpRequest,
    query: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    SEARCH_SERVICE.suggestions(query.into_inner(), &req).await
}

// 配置路由：搜索公开
pub fn configure_search_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/search")
            .route("", web::get().to(search))
            .route("/suggestions", web::get().to(suggestions)),
    );
}

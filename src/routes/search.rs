use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::search::SearchQuery;
use crate::services::SearchService;

// 懒加载的全局 SearchService 实例
static SEARCH_SERVICE: Lazy<SearchService> = Lazy::new(SearchService::new_lazy);

pub async fn search(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    SEARCH_SERVICE.search(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_search_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/search", web::get().to(search));
}

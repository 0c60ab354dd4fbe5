use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::themes::requests::{CreateThemeRequest, UpdateThemeRequest};
use crate::services::ThemeService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ThemeService 实例
static THEME_SERVICE: Lazy<ThemeService> = Lazy::new(ThemeService::new_lazy);

pub async fn active_theme(req: HttpRequest) -> ActixResult<HttpResponse> {
    THEME_SERVICE.active(&req).await
}

pub async fn list_themes(req: HttpRequest) -> ActixResult<HttpResponse> {
    THEME_SERVICE.list(&req).await
}

pub async fn create_theme(
    req: HttpRequest,
    body: web::Json<CreateThemeRequest>,
) -> ActixResult<HttpResponse> {
    THEME_SERVICE.create(body.into_inner(), &req).await
}

pub async fn update_theme(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateThemeRequest>,
) -> ActixResult<HttpResponse> {
    THEME_SERVICE.update(id.0, body.into_inner(), &req).await
}

pub async fn activate_theme(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    THEME_SERVICE.activate(id.0, &req).await
}

pub async fn delete_theme(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    THEME_SERVICE.delete(id.0, &req).await
}

// 配置路由
pub fn configure_theme_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/theme", web::get().to(active_theme)).service(
        web::scope("/api/admin/themes")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_themes))
            .route("", web::post().to(create_theme))
            .route("/{id}", web::put().to(update_theme))
            .route("/{id}", web::delete().to(delete_theme))
            .route("/{id}/activate", web::post().to(activate_theme)),
    );
}

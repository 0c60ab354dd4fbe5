use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::{
    AdminAnnouncementQueryParams, AnnouncementQueryParams, CreateAnnouncementRequest,
    LatestAnnouncementsQuery, UpdateAnnouncementRequest,
};
use crate::services::AnnouncementService;
use crate::utils::SafeIdI64;

// 懒加载的全局 AnnouncementService 实例
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> =
    Lazy::new(AnnouncementService::new_lazy);

pub async fn list_announcements(
    req: HttpRequest,
    query: web::Query<AnnouncementQueryParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_public(query.into_inner(), &req)
        .await
}

pub async fn latest_announcements(
    req: HttpRequest,
    query: web::Query<LatestAnnouncementsQuery>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.latest(query.into_inner(), &req).await
}

pub async fn get_announcement(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.get_public(id.0, &req).await
}

pub async fn admin_list_announcements(
    req: HttpRequest,
    query: web::Query<AdminAnnouncementQueryParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_admin(query.into_inner(), &req)
        .await
}

pub async fn admin_get_announcement(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.get_admin(id.0, &req).await
}

pub async fn create_announcement(
    req: HttpRequest,
    body: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.create(body.into_inner(), &req).await
}

pub async fn update_announcement(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .update(id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_announcement(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.soft_delete(id.0, &req).await
}

pub async fn restore_announcement(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.restore(id.0, &req).await
}

pub async fn force_delete_announcement(
    req: HttpRequest,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.force_delete(id.0, &req).await
}

// 配置路由
pub fn configure_announcement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/announcements")
            .route("", web::get().to(list_announcements))
            // 固定路径需先于 /{id} 注册
            .route("/latest", web::get().to(latest_announcements))
            .route("/{id}", web::get().to(get_announcement)),
    )
    .service(
        web::scope("/api/admin/announcements")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(admin_list_announcements))
            .route("", web::post().to(create_announcement))
            .route("/{id}", web::get().to(admin_get_announcement))
            .route("/{id}", web::put().to(update_announcement))
            .route("/{id}", web::delete().to(delete_announcement))
            .route("/{id}/restore", web::post().to(restore_announcement))
            .route("/{id}/force", web::delete().to(force_delete_announcement)),
    );
}

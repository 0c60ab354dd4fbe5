use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::events::requests::{
    AdminEventQueryParams, CalendarQuery, CreateEventRequest, EventQueryParams,
    UpdateEventRequest,
};
use crate::services::EventService;
use crate::utils::SafeIdI64;

// 懒加载的全局 EventService 实例
static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

pub async fn list_events(
    req: HttpRequest,
    query: web::Query<EventQueryParams>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_public(query.into_inner(), &req).await
}

pub async fn calendar(
    req: HttpRequest,
    query: web::Query<CalendarQuery>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.calendar(query.into_inner(), &req).await
}

pub async fn get_event(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.get_public(id.0, &req).await
}

pub async fn admin_list_events(
    req: HttpRequest,
    query: web::Query<AdminEventQueryParams>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_admin(query.into_inner(), &req).await
}

pub async fn admin_get_event(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.get_admin(id.0, &req).await
}

pub async fn create_event(
    req: HttpRequest,
    body: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.create(body.into_inner(), &req).await
}

pub async fn update_event(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.update(id.0, body.into_inner(), &req).await
}

pub async fn delete_event(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.soft_delete(id.0, &req).await
}

pub async fn restore_event(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.restore(id.0, &req).await
}

// 配置路由
pub fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/events")
            .route("", web::get().to(list_events))
            .route("/calendar", web::get().to(calendar))
            .route("/{id}", web::get().to(get_event)),
    )
    .service(
        web::scope("/api/admin/events")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(admin_list_events))
            .route("", web::post().to(create_event))
            .route("/{id}", web::get().to(admin_get_event))
            .route("/{id}", web::put().to(update_event))
            .route("/{id}", web::delete().to(delete_event))
            .route("/{id}/restore", web::post().to(restore_event)),
    );
}

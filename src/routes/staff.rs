use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::staff::requests::{CreateStaffRequest, StaffQueryParams, UpdateStaffRequest};
use crate::services::StaffService;
use crate::utils::SafeIdI64;

// 懒加载的全局 StaffService 实例
static STAFF_SERVICE: Lazy<StaffService> = Lazy::new(StaffService::new_lazy);

pub async fn list_staff(
    req: HttpRequest,
    query: web::Query<StaffQueryParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list(query.into_inner(), true, &req).await
}

pub async fn list_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.departments(&req).await
}

pub async fn get_staff(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get(id.0, true, &req).await
}

pub async fn admin_list_staff(
    req: HttpRequest,
    query: web::Query<StaffQueryParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list(query.into_inner(), false, &req).await
}

pub async fn admin_get_staff(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get(id.0, false, &req).await
}

pub async fn create_staff(
    req: HttpRequest,
    body: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.create(body.into_inner(), &req).await
}

pub async fn update_staff(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.update(id.0, body.into_inner(), &req).await
}

pub async fn delete_staff(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.delete(id.0, &req).await
}

// 配置路由
pub fn configure_staff_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/staff")
            .route("", web::get().to(list_staff))
            .route("/departments", web::get().to(list_departments))
            .route("/{id}", web::get().to(get_staff)),
    )
    .service(
        web::scope("/api/admin/staff")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(admin_list_staff))
            .route("", web::post().to(create_staff))
            .route("/{id}", web::get().to(admin_get_staff))
            .route("/{id}", web::put().to(update_staff))
            .route("/{id}", web::delete().to(delete_staff)),
    );
}

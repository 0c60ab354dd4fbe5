use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::contact::requests::UpdateContactRequest;
use crate::models::pages::requests::UpsertSectionRequest;
use crate::services::{ContactService, PageService};

// 懒加载的全局服务实例
static PAGE_SERVICE: Lazy<PageService> = Lazy::new(PageService::new_lazy);
static CONTACT_SERVICE: Lazy<ContactService> = Lazy::new(ContactService::new_lazy);

pub async fn list_sections(req: HttpRequest, page: web::Path<String>) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.list_sections(&page, true, &req).await
}

pub async fn admin_list_sections(
    req: HttpRequest,
    page: web::Path<String>,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.list_sections(&page, false, &req).await
}

pub async fn upsert_section(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Json<UpsertSectionRequest>,
) -> ActixResult<HttpResponse> {
    let (page, section) = path.into_inner();
    PAGE_SERVICE
        .upsert_section(&page, &section, body.into_inner(), &req)
        .await
}

pub async fn delete_section(
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (page, section) = path.into_inner();
    PAGE_SERVICE.delete_section(&page, &section, &req).await
}

pub async fn get_contact(req: HttpRequest) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.get(&req).await
}

pub async fn update_contact(
    req: HttpRequest,
    body: web::Json<UpdateContactRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update(body.into_inner(), &req).await
}

// 配置路由：页面区块与联系方式
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/pages/{page}", web::get().to(list_sections))
        .route("/api/contact", web::get().to(get_contact))
        .service(
            web::scope("/api/admin/pages")
                .wrap(middlewares::RequireJWT)
                .route("/{page}", web::get().to(admin_list_sections))
                .route("/{page}/{section}", web::put().to(upsert_section))
                .route("/{page}/{section}", web::delete().to(delete_section)),
        )
        .service(
            web::scope("/api/admin/contact")
                .wrap(middlewares::RequireJWT)
                .route("", web::get().to(get_contact))
                .route("", web::put().to(update_contact)),
        );
}

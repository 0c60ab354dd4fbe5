use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::principal::requests::{
    CreateAwardRequest, UpdateAwardRequest, UpsertPrincipalRequest,
};
use crate::services::PrincipalService;
use crate::utils::SafeIdI64;

// 懒加载的全局 PrincipalService 实例
static PRINCIPAL_SERVICE: Lazy<PrincipalService> = Lazy::new(PrincipalService::new_lazy);

pub async fn get_principal(req: HttpRequest) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE.get_profile(true, &req).await
}

pub async fn admin_get_principal(req: HttpRequest) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE.get_profile(false, &req).await
}

pub async fn upsert_principal(
    req: HttpRequest,
    body: web::Json<UpsertPrincipalRequest>,
) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE
        .upsert_profile(body.into_inner(), &req)
        .await
}

pub async fn create_award(
    req: HttpRequest,
    body: web::Json<CreateAwardRequest>,
) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE.create_award(body.into_inner(), &req).await
}

pub async fn update_award(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateAwardRequest>,
) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE
        .update_award(id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_award(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE.delete_award(id.0, &req).await
}

// 配置路由
pub fn configure_principal_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/principal", web::get().to(get_principal))
        .service(
            web::scope("/api/admin/principal")
                .wrap(middlewares::RequireJWT)
                .route("", web::get().to(admin_get_principal))
                .route("", web::put().to(upsert_principal))
                .route("/awards", web::post().to(create_award))
                .route("/awards/{id}", web::put().to(update_award))
                .route("/awards/{id}", web::delete().to(delete_award)),
        );
}

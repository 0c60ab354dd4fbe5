use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::programs::requests::{
    CreateProgramRequest, ProgramQueryParams, UpdateProgramRequest,
};
use crate::services::ProgramService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ProgramService 实例
static PROGRAM_SERVICE: Lazy<ProgramService> = Lazy::new(ProgramService::new_lazy);

pub async fn list_programs(
    req: HttpRequest,
    query: web::Query<ProgramQueryParams>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.list(query.into_inner(), true, &req).await
}

pub async fn get_program(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.get(id.0, true, &req).await
}

pub async fn admin_list_programs(
    req: HttpRequest,
    query: web::Query<ProgramQueryParams>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.list(query.into_inner(), false, &req).await
}

pub async fn admin_get_program(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.get(id.0, false, &req).await
}

pub async fn create_program(
    req: HttpRequest,
    body: web::Json<CreateProgramRequest>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.create(body.into_inner(), &req).await
}

pub async fn update_program(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateProgramRequest>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.update(id.0, body.into_inner(), &req).await
}

pub async fn delete_program(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.delete(id.0, &req).await
}

// 配置路由
pub fn configure_program_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/programs")
            .route("", web::get().to(list_programs))
            .route("/{id}", web::get().to(get_program)),
    )
    .service(
        web::scope("/api/admin/programs")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(admin_list_programs))
            .route("", web::post().to(create_program))
            .route("/{id}", web::get().to(admin_get_program))
            .route("/{id}", web::put().to(update_program))
            .route("/{id}", web::delete().to(delete_program)),
    );
}

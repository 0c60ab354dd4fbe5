use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollment::requests::{
    CreateCategoryRequest, CreateProcessRequest, CreateRequirementRequest, UpdateCategoryRequest,
    UpdateProcessRequest, UpdateRequirementRequest,
};
use crate::services::EnrollmentService;
use crate::utils::SafeIdI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn get_guidelines(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.guidelines(true, &req).await
}

pub async fn admin_get_guidelines(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.guidelines(false, &req).await
}

pub async fn create_category(
    req: HttpRequest,
    body: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_category(body.into_inner(), &req)
        .await
}

pub async fn update_category(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_category(id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_category(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_category(id.0, &req).await
}

pub async fn create_requirement(
    req: HttpRequest,
    body: web::Json<CreateRequirementRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_requirement(body.into_inner(), &req)
        .await
}

pub async fn update_requirement(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateRequirementRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_requirement(id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_requirement(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_requirement(id.0, &req).await
}

pub async fn create_process(
    req: HttpRequest,
    body: web::Json<CreateProcessRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_process(body.into_inner(), &req)
        .await
}

pub async fn update_process(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateProcessRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_process(id.0, body.into_inner(), &req)
        .await
}

pub async fn delete_process(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_process(id.0, &req).await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/enrollment", web::get().to(get_guidelines))
        .service(
            web::scope("/api/admin/enrollment")
                .wrap(middlewares::RequireJWT)
                .route("", web::get().to(admin_get_guidelines))
                .route("/categories", web::post().to(create_category))
                .route("/categories/{id}", web::put().to(update_category))
                .route("/categories/{id}", web::delete().to(delete_category))
                .route("/requirements", web::post().to(create_requirement))
                .route("/requirements/{id}", web::put().to(update_requirement))
                .route("/requirements/{id}", web::delete().to(delete_requirement))
                .route("/processes", web::post().to(create_process))
                .route("/processes/{id}", web::put().to(update_process))
                .route("/processes/{id}", web::delete().to(delete_process)),
        );
}

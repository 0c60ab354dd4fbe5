use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::uploads::UploadQuery;
use crate::services::{StorageFileService, UploadService};

// 懒加载的全局服务实例
static UPLOAD_SERVICE: Lazy<UploadService> = Lazy::new(UploadService::new_lazy);
static STORAGE_FILE_SERVICE: Lazy<StorageFileService> = Lazy::new(StorageFileService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    query: web::Query<UploadQuery>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    UPLOAD_SERVICE
        .upload(query.into_inner(), &request, payload)
        .await
}

pub async fn serve_file(
    request: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STORAGE_FILE_SERVICE.serve(&path, &request).await
}

// 配置路由：后台上传与公开的文件访问
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/uploads")
            .wrap(RateLimit::upload())
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(handle_upload)),
    )
    .service(
        web::scope("/storage")
            .wrap(middleware::Compress::default())
            .route("/{path:.*}", web::get().to(serve_file)),
    );
}

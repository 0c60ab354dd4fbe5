use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::PaginationQuery;
use crate::models::gallery::requests::{
    AdminCommentQueryParams, AdminGalleryQueryParams, CreateCommentRequest, GalleryQueryParams,
    UpdateGalleryImageRequest,
};
use crate::services::{CommentService, GalleryService};
use crate::utils::{SafeIdI64, SafeImageIdI64};

// 懒加载的全局服务实例
static GALLERY_SERVICE: Lazy<GalleryService> = Lazy::new(GalleryService::new_lazy);
static COMMENT_SERVICE: Lazy<CommentService> = Lazy::new(CommentService::new_lazy);

pub async fn list_images(
    req: HttpRequest,
    query: web::Query<GalleryQueryParams>,
) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.list_public(query.into_inner(), &req).await
}

pub async fn list_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.categories(&req).await
}

pub async fn get_image(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.get_public(id.0, &req).await
}

pub async fn list_comments(
    req: HttpRequest,
    image_id: SafeImageIdI64,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .list_public(image_id.0, query.into_inner(), &req)
        .await
}

pub async fn post_comment(
    req: HttpRequest,
    image_id: SafeImageIdI64,
    body: web::Json<CreateCommentRequest>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .post(image_id.0, body.into_inner(), &req)
        .await
}

pub async fn admin_list_images(
    req: HttpRequest,
    query: web::Query<AdminGalleryQueryParams>,
) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.list_admin(query.into_inner(), &req).await
}

pub async fn create_image(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.create(&req, payload).await
}

pub async fn update_image(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateGalleryImageRequest>,
) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.update(id.0, body.into_inner(), &req).await
}

pub async fn delete_image(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.soft_delete(id.0, &req).await
}

pub async fn restore_image(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    GALLERY_SERVICE.restore(id.0, &req).await
}

pub async fn admin_list_comments(
    req: HttpRequest,
    query: web::Query<AdminCommentQueryParams>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE.list_admin(query.into_inner(), &req).await
}

pub async fn approve_comment(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE.approve(id.0, &req).await
}

pub async fn delete_comment(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE.delete(id.0, &req).await
}

// 配置路由
pub fn configure_gallery_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/gallery")
            .route("", web::get().to(list_images))
            .route("/categories", web::get().to(list_categories))
            .route("/{id}", web::get().to(get_image))
            .route("/{image_id}/comments", web::get().to(list_comments))
            // 仅对发表评论限流
            .service(
                web::resource("/{image_id}/comments")
                    .guard(guard::Post())
                    .wrap(RateLimit::comment_post())
                    .route(web::post().to(post_comment)),
            ),
    )
    .service(
        web::scope("/api/admin/gallery")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(admin_list_images))
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(RateLimit::upload())
                    .route(web::post().to(create_image)),
            )
            .route("/{id}", web::put().to(update_image))
            .route("/{id}", web::delete().to(delete_image))
            .route("/{id}/restore", web::post().to(restore_image)),
    )
    .service(
        web::scope("/api/admin/comments")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(admin_list_comments))
            .route("/{id}/approve", web::post().to(approve_comment))
            .route("/{id}", web::delete().to(delete_comment)),
    );
}

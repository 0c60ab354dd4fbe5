use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GalleryService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn soft_delete(
    service: &GalleryService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.soft_delete_gallery_image(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Image moved to trash"))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::GalleryImageNotFound,
            "Gallery image",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete image")),
    }
}

pub async fn restore(
    service: &GalleryService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.restore_gallery_image(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Image restored"))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::GalleryImageNotFound,
            "Gallery image",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to restore image")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GalleryService;
use crate::models::gallery::responses::GalleryImageDetail;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_public(
    service: &GalleryService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let image = match storage.get_gallery_image_by_id(id, true).await {
        Ok(Some(image)) => image,
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::GalleryImageNotFound,
                "Gallery image",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to retrieve image")),
    };

    match storage.count_approved_comments(image.id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GalleryImageDetail {
                image,
                approved_comment_count: count as i64,
            },
            "Gallery image retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve image")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GalleryService, validate_image_fields};
use crate::models::gallery::requests::UpdateGalleryImageRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_image(
    service: &GalleryService,
    id: i64,
    mut body: UpdateGalleryImageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_gallery_image_by_id(id, false).await {
        Ok(Some(image)) => image,
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::GalleryImageNotFound,
                "Gallery image",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update image")),
    };

    if let Some(title) = body.title.as_mut() {
        *title = title.trim().to_string();
    }
    if let Some(category) = body.category.as_mut() {
        *category = category.trim().to_string();
    }

    let title = body.title.as_deref().unwrap_or(&existing.title);
    let category = body.category.as_deref().unwrap_or(&existing.category);
    if let Err(msg) = validate_image_fields(title, category) {
        return Ok(ApiResponse::validation(msg));
    }

    match storage.update_gallery_image(id, body).await {
        Ok(Some(image)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(image, "Image updated")))
        }
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::GalleryImageNotFound,
            "Gallery image",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update image")),
    }
}

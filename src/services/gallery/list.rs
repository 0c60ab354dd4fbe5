use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GalleryService;
use crate::models::ApiResponse;
use crate::models::gallery::requests::{
    AdminGalleryQueryParams, GalleryListQuery, GalleryQueryParams,
};

pub async fn list_public(
    service: &GalleryService,
    query: GalleryQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = GalleryListQuery {
        page,
        size,
        category: query.category,
        search: None,
        only_active: true,
        trashed: None,
    };

    match storage.list_gallery_images_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Gallery retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve gallery")),
    }
}

pub async fn categories(
    service: &GalleryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_gallery_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            categories,
            "Gallery categories retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(
            &e,
            "Failed to retrieve gallery categories",
        )),
    }
}

pub async fn list_admin(
    service: &GalleryService,
    query: AdminGalleryQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = GalleryListQuery {
        page,
        size,
        category: query.category,
        search: query.search,
        only_active: false,
        trashed: query.trashed,
    };

    match storage.list_gallery_images_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Gallery retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve gallery")),
    }
}

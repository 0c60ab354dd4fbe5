use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_public(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_active_announcement(id).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement retrieved successfully",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::AnnouncementNotFound,
            "Announcement",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve announcement")),
    }
}

pub async fn get_admin(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_announcement_by_id(id, true).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement retrieved successfully",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::AnnouncementNotFound,
            "Announcement",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve announcement")),
    }
}

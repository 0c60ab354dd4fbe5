use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AnnouncementService, validate_announcement};
use crate::models::announcements::requests::UpdateAnnouncementRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_announcement(
    service: &AnnouncementService,
    id: i64,
    mut body: UpdateAnnouncementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_announcement_by_id(id, false).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::AnnouncementNotFound,
                "Announcement",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update announcement")),
    };

    if let Some(title) = body.title.as_mut() {
        *title = title.trim().to_string();
    }

    // 用合并后的值校验
    let title = body.title.as_deref().unwrap_or(&existing.title);
    let content = body.content.as_deref().unwrap_or(&existing.content);
    let published_at = body.published_at.unwrap_or(existing.published_at);
    let expires_at = body.expires_at.unwrap_or(existing.expires_at);
    if let Err(msg) = validate_announcement(title, content, published_at, expires_at) {
        return Ok(ApiResponse::validation(msg));
    }

    match storage.update_announcement(id, body).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement updated",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::AnnouncementNotFound,
            "Announcement",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update announcement")),
    }
}

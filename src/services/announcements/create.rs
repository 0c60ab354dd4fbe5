use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AnnouncementService, validate_announcement};
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::announcements::requests::CreateAnnouncementRequest;

pub async fn create_announcement(
    service: &AnnouncementService,
    mut body: CreateAnnouncementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.title = body.title.trim().to_string();

    if let Err(msg) =
        validate_announcement(&body.title, &body.content, body.published_at, body.expires_at)
    {
        return Ok(ApiResponse::validation(msg));
    }

    body.author_id = RequireJWT::extract_user_id(request);
    let storage = service.get_storage(request)?;

    match storage.create_announcement(body).await {
        Ok(announcement) => {
            tracing::info!("Announcement {} created", announcement.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement created",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create announcement")),
    }
}

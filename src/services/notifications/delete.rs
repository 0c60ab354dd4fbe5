use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_notification(
    service: &NotificationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_notification(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Notification deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::NotificationNotFound,
            "Notification",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete notification")),
    }
}

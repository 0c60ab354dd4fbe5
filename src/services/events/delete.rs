use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn soft_delete(
    service: &EventService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.soft_delete_event(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Event moved to trash"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::EventNotFound, "Event")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete event")),
    }
}

pub async fn restore(
    service: &EventService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.restore_event(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Event restored"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::EventNotFound, "Event")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to restore event")),
    }
}

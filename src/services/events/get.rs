use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_event(
    service: &EventService,
    id: i64,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_event_by_id(id, only_active).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            event,
            "Event retrieved successfully",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::EventNotFound, "Event")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve event")),
    }
}

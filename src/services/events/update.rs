use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EventService, validate_event};
use crate::models::events::requests::UpdateEventRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_event(
    service: &EventService,
    id: i64,
    mut body: UpdateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_event_by_id(id, false).await {
        Ok(Some(event)) => event,
        Ok(None) => return Ok(ApiResponse::not_found(ErrorCode::EventNotFound, "Event")),
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update event")),
    };

    if let Some(title) = body.title.as_mut() {
        *title = title.trim().to_string();
    }

    let title = body.title.as_deref().unwrap_or(&existing.title);
    let start_date = body.start_date.unwrap_or(existing.start_date);
    let end_date = body.end_date.unwrap_or(existing.end_date);
    let start_time = match &body.start_time {
        Some(value) => value.as_deref(),
        None => existing.start_time.as_deref(),
    };
    let end_time = match &body.end_time {
        Some(value) => value.as_deref(),
        None => existing.end_time.as_deref(),
    };
    if let Err(msg) = validate_event(title, start_date, end_date, start_time, end_time) {
        return Ok(ApiResponse::validation(msg));
    }

    match storage.update_event(id, body).await {
        Ok(Some(event)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(event, "Event updated")))
        }
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::EventNotFound, "Event")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update event")),
    }
}

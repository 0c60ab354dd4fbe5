use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EventService, validate_event};
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::events::requests::CreateEventRequest;

pub async fn create_event(
    service: &EventService,
    mut body: CreateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.title = body.title.trim().to_string();

    if let Err(msg) = validate_event(
        &body.title,
        body.start_date,
        body.end_date,
        body.start_time.as_deref(),
        body.end_time.as_deref(),
    ) {
        return Ok(ApiResponse::validation(msg));
    }

    body.created_by = RequireJWT::extract_user_id(request);
    let storage = service.get_storage(request)?;

    match storage.create_event(body).await {
        Ok(event) => {
            tracing::info!("Event {} created", event.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(event, "Event created")))
        }
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create event")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::ApiResponse;
use crate::models::events::requests::{AdminEventQueryParams, EventListQuery, EventQueryParams};

pub async fn list_public(
    service: &EventService,
    query: EventQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    // upcoming=true 时保留尚未结束的活动
    let ends_on_or_after = query
        .upcoming
        .unwrap_or(false)
        .then(|| chrono::Utc::now().date_naive());

    let list_query = EventListQuery {
        page,
        size,
        category: query.category,
        search: None,
        only_active: true,
        ends_on_or_after,
        trashed: None,
    };

    match storage.list_events_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Events retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve events")),
    }
}

pub async fn list_admin(
    service: &EventService,
    query: AdminEventQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = EventListQuery {
        page,
        size,
        category: query.category,
        search: query.search,
        only_active: false,
        ends_on_or_after: None,
        trashed: query.trashed,
    };

    match storage.list_events_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Events retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve events")),
    }
}

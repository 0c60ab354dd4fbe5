use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::ApiResponse;
use crate::models::announcements::requests::{
    AdminAnnouncementQueryParams, AnnouncementListQuery, AnnouncementQueryParams,
    LatestAnnouncementsQuery,
};

const DEFAULT_LATEST_LIMIT: u64 = 5;
const MAX_LATEST_LIMIT: u64 = 20;

pub async fn list_public(
    service: &AnnouncementService,
    query: AnnouncementQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = AnnouncementListQuery {
        page,
        size,
        announcement_type: query.announcement_type,
        search: query.search,
        only_active: true,
        trashed: None,
    };

    match storage.list_announcements_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve announcements")),
    }
}

pub async fn latest(
    service: &AnnouncementService,
    query: LatestAnnouncementsQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LATEST_LIMIT)
        .clamp(1, MAX_LATEST_LIMIT);

    match storage.list_latest_announcements(limit).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Latest announcements retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(
            &e,
            "Failed to retrieve latest announcements",
        )),
    }
}

pub async fn list_admin(
    service: &AnnouncementService,
    query: AdminAnnouncementQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = AnnouncementListQuery {
        page,
        size,
        announcement_type: query.announcement_type,
        search: query.search,
        only_active: false,
        trashed: query.trashed,
    };

    match storage.list_announcements_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve announcements")),
    }
}

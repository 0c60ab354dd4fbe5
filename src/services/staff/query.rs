use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::staff::requests::{StaffListQuery, StaffQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_staff(
    service: &StaffService,
    query: StaffQueryParams,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = StaffListQuery {
        page,
        size,
        department: query.department,
        search: query.search,
        only_active,
    };

    match storage.list_staff_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Staff retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve staff")),
    }
}

pub async fn departments(
    service: &StaffService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_staff_departments().await {
        Ok(departments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            departments,
            "Departments retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve departments")),
    }
}

pub async fn get_staff(
    service: &StaffService,
    id: i64,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_staff_by_id(id, only_active).await {
        Ok(Some(staff)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff profile retrieved successfully",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::StaffNotFound, "Staff profile")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve staff profile")),
    }
}

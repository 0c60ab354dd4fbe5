use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StaffService, validate_staff};
use crate::models::staff::requests::{CreateStaffRequest, UpdateStaffRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::clean_list;

pub async fn create_staff(
    service: &StaffService,
    mut body: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.full_name = body.full_name.trim().to_string();
    body.position = body.position.trim().to_string();
    body.subjects = clean_list(body.subjects);

    if let Err(msg) = validate_staff(&body.full_name, &body.position, body.email.as_deref()) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_staff(body).await {
        Ok(staff) => Ok(HttpResponse::Created().json(ApiResponse::success(
            staff,
            "Staff profile created",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create staff profile")),
    }
}

pub async fn update_staff(
    service: &StaffService,
    id: i64,
    mut body: UpdateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_staff_by_id(id, false).await {
        Ok(Some(staff)) => staff,
        Ok(None) => return Ok(ApiResponse::not_found(ErrorCode::StaffNotFound, "Staff profile")),
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update staff profile")),
    };

    if let Some(name) = body.full_name.as_mut() {
        *name = name.trim().to_string();
    }
    if let Some(position) = body.position.as_mut() {
        *position = position.trim().to_string();
    }
    body.subjects = body.subjects.map(clean_list);

    let full_name = body.full_name.as_deref().unwrap_or(&existing.full_name);
    let position = body.position.as_deref().unwrap_or(&existing.position);
    let email = match &body.email {
        Some(value) => value.as_deref(),
        None => existing.email.as_deref(),
    };
    if let Err(msg) = validate_staff(full_name, position, email) {
        return Ok(ApiResponse::validation(msg));
    }

    match storage.update_staff(id, body).await {
        Ok(Some(staff)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff profile updated",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::StaffNotFound, "Staff profile")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update staff profile")),
    }
}

pub async fn delete_staff(
    service: &StaffService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_staff(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Staff profile deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::StaffNotFound, "Staff profile")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete staff profile")),
    }
}

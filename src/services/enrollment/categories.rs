use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EnrollmentService, trim_opt};
use crate::models::enrollment::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_text_length;

const NAME_MESSAGE: &str = "Category name must be between 1 and 255 characters";

pub async fn create_category(
    service: &EnrollmentService,
    mut body: CreateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.name = body.name.trim().to_string();
    if let Err(msg) = validate_text_length(&body.name, 1, 255, NAME_MESSAGE) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_enrollment_category(body).await {
        Ok(category) => Ok(HttpResponse::Created().json(ApiResponse::success(
            category,
            "Enrollment category created",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create enrollment category")),
    }
}

pub async fn update_category(
    service: &EnrollmentService,
    id: i64,
    mut body: UpdateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    trim_opt(&mut body.name);
    if let Some(name) = body.name.as_deref()
        && let Err(msg) = validate_text_length(name, 1, 255, NAME_MESSAGE)
    {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_enrollment_category(id, body).await {
        Ok(Some(category)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            category,
            "Enrollment category updated",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::EnrollmentCategoryNotFound,
            "Enrollment category",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update enrollment category")),
    }
}

pub async fn delete_category(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_enrollment_category(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Enrollment category deleted",
        ))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::EnrollmentCategoryNotFound,
            "Enrollment category",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete enrollment category")),
    }
}

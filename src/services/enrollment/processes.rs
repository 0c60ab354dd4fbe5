use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EnrollmentService, trim_opt, validate_step_number, validate_title};
use crate::models::enrollment::requests::{CreateProcessRequest, UpdateProcessRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_process(
    service: &EnrollmentService,
    mut body: CreateProcessRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.title = body.title.trim().to_string();
    if let Err(msg) = validate_title(&body.title).and(validate_step_number(body.step_number)) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_enrollment_process(body).await {
        Ok(process) => Ok(HttpResponse::Created().json(ApiResponse::success(
            process,
            "Enrollment process step created",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create enrollment process step")),
    }
}

pub async fn update_process(
    service: &EnrollmentService,
    id: i64,
    mut body: UpdateProcessRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    trim_opt(&mut body.title);
    if let Some(title) = body.title.as_deref()
        && let Err(msg) = validate_title(title)
    {
        return Ok(ApiResponse::validation(msg));
    }
    if let Some(step) = body.step_number
        && let Err(msg) = validate_step_number(step)
    {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_enrollment_process(id, body).await {
        Ok(Some(process)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            process,
            "Enrollment process step updated",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::EnrollmentProcessNotFound,
            "Enrollment process step",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update enrollment process step")),
    }
}

pub async fn delete_process(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_enrollment_process(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Enrollment process step deleted",
        ))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::EnrollmentProcessNotFound,
            "Enrollment process step",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete enrollment process step")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{EnrollmentService, trim_opt, validate_title};
use crate::models::enrollment::requests::{CreateRequirementRequest, UpdateRequirementRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 类别不存在时返回对应的 404 响应
async fn ensure_category(
    storage: &Arc<dyn Storage>,
    category_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_enrollment_category(category_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ApiResponse::not_found(
            ErrorCode::EnrollmentCategoryNotFound,
            "Enrollment category",
        )),
        Err(e) => Err(ApiResponse::from_error(&e, "Failed to verify enrollment category")),
    }
}

pub async fn create_requirement(
    service: &EnrollmentService,
    mut body: CreateRequirementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.title = body.title.trim().to_string();
    if let Err(msg) = validate_title(&body.title) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;
    if let Err(resp) = ensure_category(&storage, body.category_id).await {
        return Ok(resp);
    }

    match storage.create_enrollment_requirement(body).await {
        Ok(requirement) => Ok(HttpResponse::Created().json(ApiResponse::success(
            requirement,
            "Enrollment requirement created",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create enrollment requirement")),
    }
}

pub async fn update_requirement(
    service: &EnrollmentService,
    id: i64,
    mut body: UpdateRequirementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    trim_opt(&mut body.title);
    if let Some(title) = body.title.as_deref()
        && let Err(msg) = validate_title(title)
    {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;
    if let Some(category_id) = body.category_id
        && let Err(resp) = ensure_category(&storage, category_id).await
    {
        return Ok(resp);
    }

    match storage.update_enrollment_requirement(id, body).await {
        Ok(Some(requirement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            requirement,
            "Enrollment requirement updated",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(
            ErrorCode::EnrollmentRequirementNotFound,
            "Enrollment requirement",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update enrollment requirement")),
    }
}

pub async fn delete_requirement(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_enrollment_requirement(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Enrollment requirement deleted",
        ))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::EnrollmentRequirementNotFound,
            "Enrollment requirement",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete enrollment requirement")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_requirement_needs_existing_category() {
        let service = EnrollmentService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();

        let body = CreateRequirementRequest {
            category_id: 42,
            title: "Report card".to_string(),
            description: None,
            is_required: true,
            sort_order: 0,
        };
        let resp = service.create_requirement(body, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = CreateRequirementRequest {
            category_id: 42,
            title: "   ".to_string(),
            description: None,
            is_required: true,
            sort_order: 0,
        };
        let resp = service.create_requirement(body, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

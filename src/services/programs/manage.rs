use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProgramService, validate_program};
use crate::models::programs::requests::{CreateProgramRequest, UpdateProgramRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::clean_list;

pub async fn create_program(
    service: &ProgramService,
    mut body: CreateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.name = body.name.trim().to_string();
    body.description = body.description.trim().to_string();
    body.features = clean_list(body.features);

    if let Err(msg) = validate_program(&body.name, &body.description) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.create_program(body).await {
        Ok(program) => Ok(HttpResponse::Created().json(ApiResponse::success(
            program,
            "Program created",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create program")),
    }
}

pub async fn update_program(
    service: &ProgramService,
    id: i64,
    mut body: UpdateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_program_by_id(id, false).await {
        Ok(Some(program)) => program,
        Ok(None) => return Ok(ApiResponse::not_found(ErrorCode::ProgramNotFound, "Program")),
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update program")),
    };

    if let Some(name) = body.name.as_mut() {
        *name = name.trim().to_string();
    }
    if let Some(description) = body.description.as_mut() {
        *description = description.trim().to_string();
    }
    body.features = body.features.map(clean_list);

    let name = body.name.as_deref().unwrap_or(&existing.name);
    let description = body.description.as_deref().unwrap_or(&existing.description);
    if let Err(msg) = validate_program(name, description) {
        return Ok(ApiResponse::validation(msg));
    }

    match storage.update_program(id, body).await {
        Ok(Some(program)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            program,
            "Program updated",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::ProgramNotFound, "Program")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update program")),
    }
}

pub async fn delete_program(
    service: &ProgramService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_program(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Program deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::ProgramNotFound, "Program")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete program")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_program_lifecycle() {
        let service = ProgramService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();

        let body = CreateProgramRequest {
            name: " Robotics Club ".to_string(),
            description: "Build robots".to_string(),
            category: Some("stem".to_string()),
            schedule: None,
            coordinator: None,
            image_path: None,
            features: vec!["Lego".into(), " Lego ".into(), "".into()],
            is_active: false,
            sort_order: 0,
        };
        let resp = service.create(body, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["name"], "Robotics Club");
        assert_eq!(json["data"]["features"], serde_json::json!(["Lego"]));
        let id = json["data"]["id"].as_i64().unwrap();

        // 停用的项目对公开接口不可见
        let resp = service.get(id, true, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = service.get(id, false, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let update = UpdateProgramRequest {
            description: Some("  ".to_string()),
            ..Default::default()
        };
        let resp = service.update(id, update, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = service.delete(id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resp = service.delete(id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

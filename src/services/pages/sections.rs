use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PageService;
use crate::models::pages::requests::UpsertSectionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_slug;

fn validate_keys(page: &str, section_key: Option<&str>) -> Result<(), &'static str> {
    validate_slug(page)?;
    if let Some(key) = section_key {
        validate_slug(key)?;
    }
    Ok(())
}

/// metadata 只接受 JSON 对象或空
pub(crate) fn validate_metadata(metadata: Option<&serde_json::Value>) -> Result<(), &'static str> {
    match metadata {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Object(_)) => Ok(()),
        Some(_) => Err("Section metadata must be a JSON object"),
    }
}

pub async fn list_sections(
    service: &PageService,
    page: &str,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_keys(page, None) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.list_page_sections(page, only_active).await {
        Ok(sections) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sections,
            "Page content retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve page content")),
    }
}

pub async fn upsert_section(
    service: &PageService,
    page: &str,
    section_key: &str,
    mut body: UpsertSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_keys(page, Some(section_key))
        .and(validate_metadata(body.metadata.as_ref()))
    {
        return Ok(ApiResponse::validation(msg));
    }
    if matches!(body.metadata, Some(serde_json::Value::Null)) {
        body.metadata = None;
    }

    let storage = service.get_storage(request)?;

    match storage.upsert_page_section(page, section_key, body).await {
        Ok(section) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            section,
            "Page section saved",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to save page section")),
    }
}

pub async fn delete_section(
    service: &PageService,
    page: &str,
    section_key: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_keys(page, Some(section_key)) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.delete_page_section(page, section_key).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Page section deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::PageSectionNotFound, "Page section")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete page section")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use serde_json::json;
    use std::sync::Arc;

    fn section(title: &str, is_active: bool) -> UpsertSectionRequest {
        UpsertSectionRequest {
            title: Some(title.to_string()),
            content: Some("<p>Hello</p>".to_string()),
            metadata: Some(json!({ "layout": "wide" })),
            is_active,
            sort_order: 0,
        }
    }

    #[test]
    fn test_validate_metadata() {
        assert!(validate_metadata(None).is_ok());
        assert!(validate_metadata(Some(&json!(null))).is_ok());
        assert!(validate_metadata(Some(&json!({ "a": 1 }))).is_ok());
        assert!(validate_metadata(Some(&json!([1, 2]))).is_err());
        assert!(validate_metadata(Some(&json!("text"))).is_err());
    }

    #[actix_web::test]
    async fn test_sections_upsert_and_visibility() {
        let service = PageService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();

        let resp = service
            .upsert_section("about", "history", section("History", true), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        // 同一 (page, section_key) 再次写入为更新
        let resp = service
            .upsert_section("about", "history", section("Our History", true), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        service
            .upsert_section("about", "draft", section("Draft", false), &req)
            .await
            .unwrap();

        let resp = service.list_sections("about", true, &req).await.unwrap();
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let sections = json["data"].as_array().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0]["title"], "Our History");

        let resp = service.list_sections("About Us", true, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = service.delete_section("about", "missing", &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

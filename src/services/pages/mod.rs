pub mod sections;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::pages::requests::UpsertSectionRequest;

super::lazy_service!(PageService);

impl PageService {
    pub async fn list_sections(
        &self,
        page: &str,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sections::list_sections(self, page, only_active, request).await
    }

    pub async fn upsert_section(
        &self,
        page: &str,
        section_key: &str,
        body: UpsertSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sections::upsert_section(self, page, section_key, body, request).await
    }

    pub async fn delete_section(
        &self,
        page: &str,
        section_key: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sections::delete_section(self, page, section_key, request).await
    }
}

pub mod categories;
pub mod guidelines;
pub mod processes;
pub mod requirements;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::enrollment::requests::{
    CreateCategoryRequest, CreateProcessRequest, CreateRequirementRequest, UpdateCategoryRequest,
    UpdateProcessRequest, UpdateRequirementRequest,
};
use crate::utils::validate::validate_text_length;

super::lazy_service!(EnrollmentService);

impl EnrollmentService {
    /// 招生指南：类别及其要求、办理流程
    pub async fn guidelines(
        &self,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        guidelines::get_guidelines(self, only_active, request).await
    }

    pub async fn create_category(
        &self,
        body: CreateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        categories::create_category(self, body, request).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        body: UpdateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        categories::update_category(self, id, body, request).await
    }

    pub async fn delete_category(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        categories::delete_category(self, id, request).await
    }

    pub async fn create_requirement(
        &self,
        body: CreateRequirementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        requirements::create_requirement(self, body, request).await
    }

    pub async fn update_requirement(
        &self,
        id: i64,
        body: UpdateRequirementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        requirements::update_requirement(self, id, body, request).await
    }

    pub async fn delete_requirement(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        requirements::delete_requirement(self, id, request).await
    }

    pub async fn create_process(
        &self,
        body: CreateProcessRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        processes::create_process(self, body, request).await
    }

    pub async fn update_process(
        &self,
        id: i64,
        body: UpdateProcessRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        processes::update_process(self, id, body, request).await
    }

    pub async fn delete_process(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        processes::delete_process(self, id, request).await
    }
}

pub(crate) fn validate_title(value: &str) -> Result<(), &'static str> {
    validate_text_length(value, 1, 255, "Title must be between 1 and 255 characters")
}

pub(crate) fn validate_step_number(step: i32) -> Result<(), &'static str> {
    if step < 1 {
        return Err("Step number must be at least 1");
    }
    Ok(())
}

/// 原地修剪可选文本字段
fn trim_opt(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        *v = v.trim().to_string();
    }
}

pub mod awards;
pub mod profile;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::principal::requests::{
    CreateAwardRequest, UpdateAwardRequest, UpsertPrincipalRequest,
};
use crate::utils::validate::{validate_email, validate_text_length, validate_year};

super::lazy_service!(PrincipalService);

impl PrincipalService {
    /// 公开接口只返回启用中的校长信息
    pub async fn get_profile(
        &self,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::get_profile(self, only_active, request).await
    }

    pub async fn upsert_profile(
        &self,
        body: UpsertPrincipalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::upsert_profile(self, body, request).await
    }

    pub async fn create_award(
        &self,
        body: CreateAwardRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        awards::create_award(self, body, request).await
    }

    pub async fn update_award(
        &self,
        id: i64,
        body: UpdateAwardRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        awards::update_award(self, id, body, request).await
    }

    pub async fn delete_award(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        awards::delete_award(self, id, request).await
    }
}

pub(crate) fn validate_profile(req: &UpsertPrincipalRequest) -> Result<(), &'static str> {
    validate_text_length(&req.full_name, 1, 255, "Full name must be between 1 and 255 characters")?;
    validate_text_length(&req.title, 1, 255, "Title must be between 1 and 255 characters")?;
    if let Some(email) = req.email.as_deref() {
        validate_email(email)?;
    }
    Ok(())
}

pub(crate) fn validate_award(title: &str, year: i32) -> Result<(), &'static str> {
    validate_text_length(title, 1, 255, "Award title must be between 1 and 255 characters")?;
    validate_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, email: Option<&str>) -> UpsertPrincipalRequest {
        UpsertPrincipalRequest {
            full_name: name.to_string(),
            title: "Principal".to_string(),
            message: None,
            bio: None,
            photo_path: None,
            email: email.map(str::to_string),
            is_active: true,
        }
    }

    #[test]
    fn test_validate_profile() {
        assert!(validate_profile(&profile("Dr. Smith", None)).is_ok());
        assert!(validate_profile(&profile("", None)).is_err());
        assert!(validate_profile(&profile("Dr. Smith", Some("not-an-email"))).is_err());
    }

    #[test]
    fn test_validate_award() {
        assert!(validate_award("Educator of the Year", 2021).is_ok());
        assert!(validate_award("Educator of the Year", 1850).is_err());
        assert!(validate_award("  ", 2021).is_err());
    }
}

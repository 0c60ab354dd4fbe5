pub mod manage;
pub mod query;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::staff::requests::{CreateStaffRequest, StaffQueryParams, UpdateStaffRequest};
use crate::utils::validate::{validate_email, validate_text_length};

super::lazy_service!(StaffService);

impl StaffService {
    pub async fn list(
        &self,
        query: StaffQueryParams,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::list_staff(self, query, only_active, request).await
    }

    pub async fn departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        query::departments(self, request).await
    }

    pub async fn get(
        &self,
        id: i64,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::get_staff(self, id, only_active, request).await
    }

    pub async fn create(
        &self,
        body: CreateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_staff(self, body, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        body: UpdateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_staff(self, id, body, request).await
    }

    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::delete_staff(self, id, request).await
    }
}

pub(crate) fn validate_staff(
    full_name: &str,
    position: &str,
    email: Option<&str>,
) -> Result<(), &'static str> {
    validate_text_length(full_name, 1, 255, "Full name must be between 1 and 255 characters")?;
    validate_text_length(position, 1, 255, "Position must be between 1 and 255 characters")?;
    if let Some(email) = email {
        validate_email(email)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_staff() {
        assert!(validate_staff("Jane Doe", "Math Teacher", None).is_ok());
        assert!(validate_staff("Jane Doe", "Math Teacher", Some("jane@school.test")).is_ok());
        assert!(validate_staff("Jane Doe", "Math Teacher", Some("jane")).is_err());
        assert!(validate_staff(" ", "Math Teacher", None).is_err());
        assert!(validate_staff("Jane Doe", "", None).is_err());
    }
}

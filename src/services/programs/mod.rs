pub mod manage;
pub mod query;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::programs::requests::{
    CreateProgramRequest, ProgramQueryParams, UpdateProgramRequest,
};
use crate::utils::validate::validate_text_length;

super::lazy_service!(ProgramService);

impl ProgramService {
    pub async fn list(
        &self,
        query: ProgramQueryParams,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::list_programs(self, query, only_active, request).await
    }

    pub async fn get(
        &self,
        id: i64,
        only_active: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::get_program(self, id, only_active, request).await
    }

    pub async fn create(
        &self,
        body: CreateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_program(self, body, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        body: UpdateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_program(self, id, body, request).await
    }

    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::delete_program(self, id, request).await
    }
}

pub(crate) fn validate_program(name: &str, description: &str) -> Result<(), &'static str> {
    validate_text_length(name, 1, 255, "Program name must be between 1 and 255 characters")?;
    validate_text_length(
        description,
        1,
        10_000,
        "Program description must be between 1 and 10000 characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_program() {
        assert!(validate_program("Robotics Club", "Build and compete").is_ok());
        assert!(validate_program("", "Build and compete").is_err());
        assert!(validate_program("Robotics Club", "   ").is_err());
    }
}

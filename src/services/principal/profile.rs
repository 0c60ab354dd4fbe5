use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PrincipalService, validate_profile};
use crate::models::principal::{
    requests::UpsertPrincipalRequest, responses::PrincipalWithAwards,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_profile(
    service: &PrincipalService,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let profile = match storage.get_principal(only_active).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::PrincipalNotFound,
                "Principal profile",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to retrieve principal profile")),
    };

    match storage.list_principal_awards(profile.id).await {
        Ok(awards) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PrincipalWithAwards { profile, awards },
            "Principal profile retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve principal awards")),
    }
}

pub async fn upsert_profile(
    service: &PrincipalService,
    mut body: UpsertPrincipalRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.full_name = body.full_name.trim().to_string();
    body.title = body.title.trim().to_string();

    if let Err(msg) = validate_profile(&body) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.upsert_principal(body).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            profile,
            "Principal profile saved",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to save principal profile")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::principal::requests::CreateAwardRequest;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_public_profile_requires_active_principal() {
        let storage = Arc::new(memory_storage().await);
        let service = PrincipalService::with_storage(storage.clone());
        let req = TestRequest::default().to_http_request();

        let resp = service.get_profile(true, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = UpsertPrincipalRequest {
            full_name: "Dr. Smith".to_string(),
            title: "Principal".to_string(),
            message: Some("Welcome".to_string()),
            bio: None,
            photo_path: None,
            email: None,
            is_active: false,
        };
        let resp = service.upsert_profile(body, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service.get_profile(true, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = service.get_profile(false, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let award = CreateAwardRequest {
            title: "Leadership Award".to_string(),
            awarding_body: None,
            year: 2020,
            description: None,
            sort_order: 0,
        };
        let resp = service.create_award(award, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_award_requires_principal() {
        let storage = Arc::new(memory_storage().await);
        let service = PrincipalService::with_storage(storage);
        let req = TestRequest::default().to_http_request();

        let award = CreateAwardRequest {
            title: "Leadership Award".to_string(),
            awarding_body: None,
            year: 2020,
            description: None,
            sort_order: 0,
        };
        let resp = service.create_award(award, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

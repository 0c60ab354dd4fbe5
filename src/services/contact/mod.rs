use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::contact::requests::UpdateContactRequest;
use crate::utils::validate::validate_email;

super::lazy_service!(ContactService);

/// 空白字段统一存为 None
fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactService {
    pub async fn get(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;

        match storage.get_contact_info().await {
            Ok(info) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                info.unwrap_or_default(),
                "Contact information retrieved successfully",
            ))),
            Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve contact information")),
        }
    }

    pub async fn update(
        &self,
        body: UpdateContactRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let body = UpdateContactRequest {
            address: blank_to_none(body.address),
            phone: blank_to_none(body.phone),
            email: blank_to_none(body.email),
            office_hours: blank_to_none(body.office_hours),
            facebook_url: blank_to_none(body.facebook_url),
            map_embed_url: blank_to_none(body.map_embed_url),
        };

        if let Some(email) = body.email.as_deref()
            && let Err(msg) = validate_email(email)
        {
            return Ok(ApiResponse::validation(msg));
        }

        let storage = self.get_storage(request)?;

        match storage.update_contact_info(body).await {
            Ok(info) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                info,
                "Contact information updated",
            ))),
            Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update contact information")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_contact_defaults_then_update() {
        let service = ContactService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();

        let json = body_json(service.get(&req).await.unwrap()).await;
        assert!(json["data"]["address"].is_null());
        assert!(json["data"]["updated_at"].is_null());

        let resp = service
            .update(
                UpdateContactRequest {
                    email: Some("not-an-email".to_string()),
                    ..Default::default()
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = service
            .update(
                UpdateContactRequest {
                    address: Some(" 1 School Road ".to_string()),
                    phone: Some("   ".to_string()),
                    email: Some("office@school.test".to_string()),
                    ..Default::default()
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(service.get(&req).await.unwrap()).await;
        assert_eq!(json["data"]["address"], "1 School Road");
        assert!(json["data"]["phone"].is_null());
        assert_eq!(json["data"]["email"], "office@school.test");
    }
}

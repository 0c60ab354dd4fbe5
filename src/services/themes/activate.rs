use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ThemeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn activate_theme(
    service: &ThemeService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.activate_theme(id).await {
        Ok(Some(theme)) => {
            tracing::info!("Theme {} ({}) activated", theme.id, theme.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(theme, "Theme activated")))
        }
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::ThemeNotFound, "Theme")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to activate theme")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::themes::requests::CreateThemeRequest;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    fn theme(name: &str) -> CreateThemeRequest {
        CreateThemeRequest {
            name: name.to_string(),
            primary_color: "#112233".to_string(),
            secondary_color: "#445566".to_string(),
            accent_color: "#778899".to_string(),
            font_family: None,
            logo_path: None,
        }
    }

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_theme_activation_flow() {
        let service = ThemeService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();

        // 尚未激活任何主题时返回内置默认主题
        let json = body_json(service.active(&req).await.unwrap()).await;
        assert_eq!(json["data"]["id"], 0);
        assert_eq!(json["data"]["name"], "default");

        let first = body_json(service.create(theme("Ocean"), &req).await.unwrap()).await;
        let first_id = first["data"]["id"].as_i64().unwrap();
        let second = body_json(service.create(theme("Forest"), &req).await.unwrap()).await;
        let second_id = second["data"]["id"].as_i64().unwrap();

        let resp = service.create(theme("Ocean"), &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let mut bad = theme("Sunset");
        bad.accent_color = "orange".to_string();
        let resp = service.create(bad, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        service.activate(first_id, &req).await.unwrap();
        let resp = service.activate(second_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(service.list(&req).await.unwrap()).await;
        let active: Vec<i64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|t| t["is_active"] == true)
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(active, vec![second_id]);

        let resp = service.delete(second_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let resp = service.delete(first_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service.activate(9999, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::notifications::responses::MarkAllReadResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn mark_read(
    service: &NotificationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.mark_notification_read(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Notification marked as read",
        ))),
        Ok(false) => Ok(ApiResponse::not_found(
            ErrorCode::NotificationNotFound,
            "Notification",
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to mark notification as read")),
    }
}

pub async fn mark_all_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.mark_all_notifications_read().await {
        Ok(marked_count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MarkAllReadResponse { marked_count },
            "All notifications marked as read",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to mark notifications as read")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notifications::entities::{NewNotification, NotificationType};
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_mark_read_and_unread_count() {
        let storage = Arc::new(memory_storage().await);
        let mut ids = Vec::new();
        for i in 0..3 {
            let created = storage
                .create_notification(NewNotification {
                    notification_type: NotificationType::Comment,
                    title: format!("New comment {i}"),
                    message: "A guest left a comment".to_string(),
                    link: None,
                    data: serde_json::json!({}),
                })
                .await
                .unwrap();
            ids.push(created.id);
        }

        let service = NotificationService::with_storage(storage);
        let req = TestRequest::default().to_http_request();

        let json = body_json(service.unread_count(&req).await.unwrap()).await;
        assert_eq!(json["data"]["unread_count"], 3);

        let resp = service.mark_read(ids[0], &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(service.unread_count(&req).await.unwrap()).await;
        assert_eq!(json["data"]["unread_count"], 2);

        let json = body_json(service.mark_all_read(&req).await.unwrap()).await;
        assert_eq!(json["data"]["marked_count"], 2);

        let resp = service.delete(ids[1], &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let resp = service.mark_read(ids[1], &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};

fn outcome(result: crate::errors::Result<bool>, success: &str, failure: &str) -> HttpResponse {
    match result {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::success_empty(success)),
        Ok(false) => ApiResponse::not_found(ErrorCode::AnnouncementNotFound, "Announcement"),
        Err(e) => ApiResponse::from_error(&e, failure),
    }
}

pub async fn soft_delete(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(outcome(
        storage.soft_delete_announcement(id).await,
        "Announcement moved to trash",
        "Failed to delete announcement",
    ))
}

pub async fn restore(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(outcome(
        storage.restore_announcement(id).await,
        "Announcement restored",
        "Failed to restore announcement",
    ))
}

pub async fn force_delete(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    Ok(outcome(
        storage.force_delete_announcement(id).await,
        "Announcement permanently deleted",
        "Failed to delete announcement",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::announcements::entities::AnnouncementType;
    use crate::models::announcements::requests::CreateAnnouncementRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_soft_delete_then_restore() {
        let storage = Arc::new(memory_storage().await);
        let created = storage
            .create_announcement(CreateAnnouncementRequest {
                title: "Sports day".into(),
                content: "Friday".into(),
                announcement_type: AnnouncementType::Event,
                is_active: true,
                is_pinned: false,
                published_at: None,
                expires_at: None,
                image_path: None,
                author_id: None,
            })
            .await
            .unwrap();
        let service = AnnouncementService::with_storage(storage.clone());
        let req = TestRequest::default().to_http_request();

        let resp = soft_delete(&service, created.id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(storage.get_active_announcement(created.id).await.unwrap().is_none());

        // 已在回收站中的公告不能再次软删除
        let resp = soft_delete(&service, created.id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = restore(&service, created.id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(storage.get_active_announcement(created.id).await.unwrap().is_some());

        let resp = force_delete(&service, 999, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use serde_json::json;

use super::CommentService;
use super::limits::{evaluate_comment_limits, utc_day_start};
use crate::config::AppConfig;
use crate::middlewares::rate_limit::client_ip;
use crate::models::gallery::entities::{GalleryComment, GalleryImage, PublicComment};
use crate::models::gallery::requests::{CreateCommentRequest, NewComment};
use crate::models::gallery::responses::{CommentCreatedResponse, CommentRateLimitedResponse};
use crate::models::notifications::entities::{NewNotification, NotificationType};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_text_length;

/// 去除首尾空白并校验访客提交的字段
pub(crate) fn normalize_comment(
    mut body: CreateCommentRequest,
) -> Result<CreateCommentRequest, &'static str> {
    body.guest_name = body.guest_name.trim().to_string();
    body.guest_id = body.guest_id.trim().to_string();
    body.content = body.content.trim().to_string();
    body.browser_fingerprint = body
        .browser_fingerprint
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty());

    validate_text_length(&body.guest_name, 1, 50, "Name must be between 1 and 50 characters")?;
    validate_text_length(&body.guest_id, 1, 100, "Guest id must be between 1 and 100 characters")?;
    validate_text_length(
        &body.content,
        1,
        500,
        "Comment must be between 1 and 500 characters",
    )?;
    if let Some(fingerprint) = &body.browser_fingerprint {
        validate_text_length(fingerprint, 1, 255, "Browser fingerprint is too long")?;
    }
    Ok(body)
}

async fn notify_new_comment(
    storage: &dyn Storage,
    image: &GalleryImage,
    comment: &GalleryComment,
) {
    let notification = NewNotification {
        notification_type: NotificationType::Comment,
        title: "New gallery comment".to_string(),
        message: format!("{} commented on \"{}\"", comment.guest_name, image.title),
        link: Some(format!("/admin/gallery/comments?image_id={}", image.id)),
        data: json!({
            "comment_id": comment.id,
            "gallery_image_id": image.id,
            "is_approved": comment.is_approved,
        }),
    };

    // 通知失败不影响评论本身
    if let Err(e) = storage.create_notification(notification).await {
        tracing::warn!("Failed to create comment notification: {}", e);
    }
}

pub async fn post_comment(
    service: &CommentService,
    image_id: i64,
    body: CreateCommentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = &AppConfig::get().comments;

    // 1. 图片必须存在且公开
    let image = match storage.get_gallery_image_by_id(image_id, true).await {
        Ok(Some(image)) => image,
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::GalleryImageNotFound,
                "Gallery image",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to post comment")),
    };

    // 2. 字段校验
    let body = match normalize_comment(body) {
        Ok(body) => body,
        Err(msg) => return Ok(ApiResponse::validation(msg)),
    };

    // 3. 限流
    let now = chrono::Utc::now();
    let stats = match storage
        .get_guest_comment_stats(
            image.id,
            &body.guest_id,
            body.browser_fingerprint.as_deref(),
            utc_day_start(now),
        )
        .await
    {
        Ok(stats) => stats,
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to post comment")),
    };

    if let Err(violation) = evaluate_comment_limits(&stats, now, config) {
        tracing::info!(
            "Comment from guest {} rejected: {:?}",
            body.guest_id,
            violation
        );
        let mut envelope = ApiResponse::error(
            ErrorCode::CommentRateLimited,
            CommentRateLimitedResponse {
                retry_after: violation.retry_after(),
            },
            "Too many comments",
        );
        envelope.error = Some(violation.message());

        let mut response = HttpResponse::TooManyRequests();
        if let Some(seconds) = violation.retry_after() {
            response.insert_header((header::RETRY_AFTER, seconds.to_string()));
        }
        return Ok(response.json(envelope));
    }

    // 4. 写入
    let new_comment = NewComment {
        gallery_image_id: image.id,
        guest_name: body.guest_name,
        guest_id: body.guest_id,
        browser_fingerprint: body.browser_fingerprint,
        ip_address: Some(client_ip(request)),
        content: body.content,
        is_approved: config.auto_approve,
    };

    let comment = match storage.create_comment(new_comment).await {
        Ok(comment) => comment,
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to post comment")),
    };

    notify_new_comment(storage.as_ref(), &image, &comment).await;

    let pending_approval = !comment.is_approved;
    let message = if pending_approval {
        "Comment submitted and awaiting approval"
    } else {
        "Comment posted"
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(
        CommentCreatedResponse {
            comment: PublicComment::from(comment),
            pending_approval,
        },
        message,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gallery::requests::CreateGalleryImage;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    fn body(guest_id: &str, content: &str) -> CreateCommentRequest {
        CreateCommentRequest {
            guest_name: "Parent".into(),
            guest_id: guest_id.into(),
            browser_fingerprint: None,
            content: content.into(),
        }
    }

    #[test]
    fn test_normalize_comment() {
        let ok = normalize_comment(body("  g-1 ", "  Lovely photo ")).unwrap();
        assert_eq!(ok.guest_id, "g-1");
        assert_eq!(ok.content, "Lovely photo");

        assert!(normalize_comment(body("g-1", "   ")).is_err());
        assert!(normalize_comment(body("g-1", &"x".repeat(501))).is_err());
        assert!(normalize_comment(body("g-1", &"x".repeat(500))).is_ok());
        assert!(normalize_comment(body("", "hi")).is_err());

        let mut long_name = body("g-1", "hi");
        long_name.guest_name = "n".repeat(51);
        assert!(normalize_comment(long_name).is_err());
    }

    #[actix_web::test]
    async fn test_post_then_cooldown() {
        let storage = Arc::new(memory_storage().await);
        let image = storage
            .create_gallery_image(CreateGalleryImage {
                title: "Sports day".into(),
                description: None,
                category: "events".into(),
                image_path: "gallery/1-a.png".into(),
                sort_order: 0,
                uploaded_by: None,
            })
            .await
            .unwrap();
        let service = CommentService::with_storage(storage.clone());
        let req = TestRequest::default().to_http_request();

        let resp = post_comment(&service, image.id, body("guest-1", "Great day"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(storage.count_unread_notifications().await.unwrap(), 1);

        let resp = post_comment(&service, image.id, body("guest-1", "Again"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(resp.headers().contains_key(header::RETRY_AFTER));

        // 其他访客不受影响
        let resp = post_comment(&service, image.id, body("guest-2", "Nice"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = post_comment(&service, 9999, body("guest-3", "Hello"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

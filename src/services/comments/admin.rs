use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CommentService;
use crate::models::gallery::entities::CommentStatusFilter;
use crate::models::gallery::requests::{AdminCommentQueryParams, CommentListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_admin(
    service: &CommentService,
    query: AdminCommentQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = CommentListQuery {
        page,
        size,
        image_id: query.image_id,
        status: query.status.unwrap_or(CommentStatusFilter::All),
        oldest_first: false,
    };

    match storage.list_comments_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Comments retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve comments")),
    }
}

pub async fn approve(
    service: &CommentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.approve_comment(id).await {
        Ok(Some(comment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(comment, "Comment approved")))
        }
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::CommentNotFound, "Comment")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to approve comment")),
    }
}

pub async fn delete(
    service: &CommentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_comment(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Comment deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::CommentNotFound, "Comment")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete comment")),
    }
}

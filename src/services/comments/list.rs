use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CommentService;
use crate::models::gallery::entities::{CommentStatusFilter, PublicComment};
use crate::models::gallery::requests::CommentListQuery;
use crate::models::{ApiResponse, ErrorCode, PaginatedResponse, PaginationQuery};

pub async fn list_public(
    service: &CommentService,
    image_id: i64,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_gallery_image_by_id(image_id, true).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::GalleryImageNotFound,
                "Gallery image",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to retrieve comments")),
    }

    let (page, size) = query.normalized();
    let list_query = CommentListQuery {
        page,
        size,
        image_id: Some(image_id),
        status: CommentStatusFilter::Approved,
        oldest_first: true,
    };

    match storage.list_comments_with_pagination(list_query).await {
        Ok(response) => {
            // 公开视图不暴露访客标识
            let response = PaginatedResponse {
                items: response
                    .items
                    .into_iter()
                    .map(PublicComment::from)
                    .collect(),
                pagination: response.pagination,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Comments retrieved successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve comments")),
    }
}

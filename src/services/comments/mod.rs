pub mod admin;
pub mod limits;
pub mod list;
pub mod post;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::PaginationQuery;
use crate::models::gallery::requests::{AdminCommentQueryParams, CreateCommentRequest};

super::lazy_service!(CommentService);

impl CommentService {
    // 图片下已审核的评论
    pub async fn list_public(
        &self,
        image_id: i64,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_public(self, image_id, query, request).await
    }

    // 访客发表评论
    pub async fn post(
        &self,
        image_id: i64,
        body: CreateCommentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        post::post_comment(self, image_id, body, request).await
    }

    pub async fn list_admin(
        &self,
        query: AdminCommentQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        admin::list_admin(self, query, request).await
    }

    pub async fn approve(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        admin::approve(self, id, request).await
    }

    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        admin::delete(self, id, request).await
    }
}

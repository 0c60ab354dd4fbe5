pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::gallery::requests::{
    AdminGalleryQueryParams, GalleryQueryParams, UpdateGalleryImageRequest,
};
use crate::utils::validate::validate_text_length;

super::lazy_service!(GalleryService);

pub(crate) const GALLERY_FOLDER: &str = "gallery";

impl GalleryService {
    pub async fn list_public(
        &self,
        query: GalleryQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_public(self, query, request).await
    }

    pub async fn categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::categories(self, request).await
    }

    // 图片详情（附带已审核评论数）
    pub async fn get_public(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_public(self, id, request).await
    }

    pub async fn list_admin(
        &self,
        query: AdminGalleryQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_admin(self, query, request).await
    }

    pub async fn create(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_image(self, request, payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        body: UpdateGalleryImageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_image(self, id, body, request).await
    }

    pub async fn soft_delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::soft_delete(self, id, request).await
    }

    pub async fn restore(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::restore(self, id, request).await
    }
}

pub(crate) fn validate_image_fields(title: &str, category: &str) -> Result<(), &'static str> {
    validate_text_length(title, 1, 255, "Title must be between 1 and 255 characters")?;
    validate_text_length(category, 1, 100, "Category must be between 1 and 100 characters")?;
    Ok(())
}

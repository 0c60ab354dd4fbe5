pub mod store;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::uploads::UploadQuery;

/// 通用文件上传，只写磁盘不落库
pub struct UploadService;

impl UploadService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn upload(
        &self,
        query: UploadQuery,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(query, request, payload).await
    }
}

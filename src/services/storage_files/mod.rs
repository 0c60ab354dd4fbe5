pub mod serve;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

/// `/storage/...` 下的已上传文件
pub struct StorageFileService;

impl StorageFileService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn serve(&self, path: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        serve::handle_serve(path, request).await
    }
}

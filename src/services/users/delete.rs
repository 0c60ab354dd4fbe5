use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use super::UserService;
use crate::cache::ObjectCache;
use crate::middlewares::{RequireJWT, require_jwt::user_cache_key};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_detail(
                ErrorCode::CannotDeleteSelf,
                "User deletion failed",
                "You cannot delete your own account",
            )),
        );
    }

    let storage = service.get_storage(request)?;

    match storage.delete_user(user_id).await {
        Ok(true) => {
            // 使认证缓存中的账号失效
            if let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>() {
                cache.remove(&user_cache_key(user_id)).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted")))
        }
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::UserNotFound, "User")),
        Err(e) => Ok(ApiResponse::from_error(&e, "User deletion failed")),
    }
}

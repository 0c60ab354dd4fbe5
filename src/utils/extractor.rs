//! 路径参数提取器
//!
//! 在进入处理函数前完成 ID 校验，非法值直接返回统一的 400 响应。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path_param(name: &str, raw: &str) -> actix_web::Error {
    let detail = format!("Path parameter '{name}' must be a positive integer, got '{raw}'");
    InternalError::from_response(
        detail.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_detail(
            ErrorCode::BadRequest,
            "Invalid path parameter",
            detail,
        )),
    )
    .into()
}

/// 解析正整数 ID
pub fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

macro_rules! define_safe_id {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                ready(
                    parse_positive_id(raw)
                        .map($name)
                        .ok_or_else(|| bad_path_param($param, raw)),
                )
            }
        }
    };
}

define_safe_id!(
    /// 路径中的 `{id}`
    SafeIdI64,
    "id"
);

define_safe_id!(
    /// 相册评论路由中的 `{image_id}`
    SafeImageIdI64,
    "image_id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42"), Some(42));
        assert_eq!(parse_positive_id("0"), None);
        assert_eq!(parse_positive_id("-3"), None);
        assert_eq!(parse_positive_id("abc"), None);
        assert_eq!(parse_positive_id(""), None);
    }

    #[actix_web::test]
    async fn test_extractor_reads_match_info() {
        let (req, mut payload) = TestRequest::default()
            .param("id", "7")
            .to_http_parts();
        let id = SafeIdI64::from_request(&req, &mut payload).await.unwrap();
        assert_eq!(id.0, 7);

        let (req, mut payload) = TestRequest::default()
            .param("id", "seven")
            .to_http_parts();
        let err = SafeIdI64::from_request(&req, &mut payload)
            .await
            .unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}

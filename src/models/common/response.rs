use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SchoolSiteError;
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub success: bool,
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code as i32,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code as i32,
            message: message.into(),
            data: None,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 带错误详情的失败响应
    pub fn error_detail(
        code: ErrorCode,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            code: code as i32,
            message: message.into(),
            data: None,
            error: Some(error.into()),
            timestamp: chrono::Utc::now(),
        }
    }

    /// 将存储层错误转换为 HTTP 响应，状态码由错误类型决定
    pub fn from_error(err: &SchoolSiteError, message: impl Into<String>) -> HttpResponse {
        let code = match err {
            SchoolSiteError::Validation(_) | SchoolSiteError::DateParse(_) => {
                ErrorCode::ValidationFailed
            }
            SchoolSiteError::NotFound(_) => ErrorCode::NotFound,
            SchoolSiteError::Authentication(_) => ErrorCode::Unauthorized,
            SchoolSiteError::Authorization(_) => ErrorCode::Forbidden,
            SchoolSiteError::Conflict(_) => ErrorCode::Conflict,
            SchoolSiteError::RateLimited(_) => ErrorCode::RateLimitExceeded,
            _ => ErrorCode::InternalServerError,
        };
        if code == ErrorCode::InternalServerError {
            tracing::error!("{}", err);
        }
        HttpResponse::build(err.status_code()).json(Self::error_detail(
            code,
            message,
            err.message(),
        ))
    }

    /// 404 响应，`what` 为资源名称
    pub fn not_found(code: ErrorCode, what: &str) -> HttpResponse {
        HttpResponse::NotFound().json(Self::error_detail(
            code,
            format!("{what} not found"),
            format!("The requested {} does not exist", what.to_lowercase()),
        ))
    }

    /// 422 校验失败响应
    pub fn validation(message: impl Into<String>) -> HttpResponse {
        let message = message.into();
        HttpResponse::UnprocessableEntity().json(Self::error_detail(
            ErrorCode::ValidationFailed,
            "Validation failed",
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(42i64, "ok");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["code"], 0);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let resp = ApiResponse::error_detail(ErrorCode::NotFound, "Event not found", "id 7");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Event not found");
        assert_eq!(json["error"], "id 7");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_from_error_status() {
        let resp = ApiResponse::from_error(&SchoolSiteError::validation("bad"), "Invalid input");
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = ApiResponse::from_error(&SchoolSiteError::not_found("gone"), "Missing");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiResponse::from_error(&SchoolSiteError::database_operation("db"), "Failed");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_and_validation_status() {
        let resp = ApiResponse::not_found(ErrorCode::EventNotFound, "Event");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiResponse::validation("title is required");
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

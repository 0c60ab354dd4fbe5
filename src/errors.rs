//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及对应的 HTTP 状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_site_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolSiteError {
            $($variant(String),)*
        }

        impl SchoolSiteError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSiteError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSiteError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSiteError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolSiteError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSiteError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_site_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    Conflict("E013", "Resource Conflict"),
    RateLimited("E014", "Rate Limit Exceeded"),
}

impl SchoolSiteError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 映射到 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            SchoolSiteError::Validation(_) | SchoolSiteError::DateParse(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SchoolSiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SchoolSiteError::Authentication(_) => StatusCode::UNAUTHORIZED,
            SchoolSiteError::Authorization(_) => StatusCode::FORBIDDEN,
            SchoolSiteError::Conflict(_) => StatusCode::CONFLICT,
            SchoolSiteError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolSiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSiteError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolSiteError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolSiteError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolSiteError {
    fn from(err: std::io::Error) -> Self {
        SchoolSiteError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolSiteError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSiteError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolSiteError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolSiteError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolSiteError::cache_connection("test").code(), "E001");
        assert_eq!(SchoolSiteError::database_config("test").code(), "E003");
        assert_eq!(SchoolSiteError::validation("test").code(), "E007");
        assert_eq!(SchoolSiteError::authentication("test").code(), "E011");
        assert_eq!(SchoolSiteError::rate_limited("test").code(), "E014");
    }

    #[test]
    fn test_from_db_err() {
        let err: SchoolSiteError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("2025-13-01", "%Y-%m-%d").unwrap_err();
        let err: SchoolSiteError = parse_err.into();
        assert_eq!(err.error_type(), "Date Parse Error");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolSiteError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SchoolSiteError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SchoolSiteError::validation("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            SchoolSiteError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SchoolSiteError::rate_limited("x").status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            SchoolSiteError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolSiteError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolSiteError::conflict("Theme name already exists");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Conflict"));
        assert!(formatted.contains("Theme name already exists"));
    }
}

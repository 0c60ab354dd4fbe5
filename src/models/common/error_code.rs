//! 业务错误码
//!
//! 按模块分段：1xxx 通用，2xxx 认证与账号，3xxx 站点内容，4xxx 文件与搜索，5xxx 服务器内部。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,

    // 认证与账号
    AuthFailed = 2000,
    UserInactive = 2001,
    UserNotFound = 2002,
    UserAlreadyExists = 2003,
    CannotDeleteSelf = 2004,

    // 站点内容
    AnnouncementNotFound = 3000,
    EventNotFound = 3100,
    GalleryImageNotFound = 3200,
    CommentNotFound = 3201,
    CommentRateLimited = 3202,
    StaffNotFound = 3300,
    PrincipalNotFound = 3400,
    AwardNotFound = 3401,
    EnrollmentCategoryNotFound = 3500,
    EnrollmentRequirementNotFound = 3501,
    EnrollmentProcessNotFound = 3502,
    ProgramNotFound = 3600,
    PageSectionNotFound = 3700,
    ThemeNotFound = 3800,
    ThemeInUse = 3801,
    ThemeAlreadyExists = 3802,
    NotificationNotFound = 3900,

    // 文件与搜索
    FileNotFound = 4000,
    FileTypeNotAllowed = 4001,
    FileSizeExceeded = 4002,
    FileUploadFailed = 4003,
    MultifileUploadNotAllowed = 4004,
    SearchQueryTooShort = 4100,

    InternalServerError = 5000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::ValidationFailed as i32, 1001);
        assert_eq!(ErrorCode::CommentRateLimited as i32, 3202);
        assert_eq!(ErrorCode::InternalServerError as i32, 5000);
    }
}

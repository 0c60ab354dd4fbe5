pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};

use crate::models::announcements::requests::{
    AdminAnnouncementQueryParams, AnnouncementQueryParams, CreateAnnouncementRequest,
    LatestAnnouncementsQuery, UpdateAnnouncementRequest,
};
use crate::utils::validate::validate_text_length;

super::lazy_service!(AnnouncementService);

impl AnnouncementService {
    // 公开列表
    pub async fn list_public(
        &self,
        query: AnnouncementQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_public(self, query, request).await
    }

    // 最新公告
    pub async fn latest(
        &self,
        query: LatestAnnouncementsQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::latest(self, query, request).await
    }

    // 公开详情
    pub async fn get_public(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_public(self, id, request).await
    }

    // 后台列表
    pub async fn list_admin(
        &self,
        query: AdminAnnouncementQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_admin(self, query, request).await
    }

    // 后台详情（包含回收站）
    pub async fn get_admin(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_admin(self, id, request).await
    }

    pub async fn create(
        &self,
        body: CreateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, body, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        body: UpdateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, id, body, request).await
    }

    pub async fn soft_delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::soft_delete(self, id, request).await
    }

    pub async fn restore(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::restore(self, id, request).await
    }

    pub async fn force_delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::force_delete(self, id, request).await
    }
}

/// 公告字段校验（更新时传入合并后的值）
pub(crate) fn validate_announcement(
    title: &str,
    content: &str,
    published_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
) -> Result<(), &'static str> {
    validate_text_length(title, 1, 255, "Title must be between 1 and 255 characters")?;
    if content.trim().is_empty() {
        return Err("Content must not be empty");
    }
    if let (Some(published), Some(expires)) = (published_at, expires_at)
        && expires <= published
    {
        return Err("expires_at must be later than published_at");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_announcement() {
        let now = Utc::now();
        assert!(validate_announcement("Open day", "Welcome", None, None).is_ok());
        assert!(validate_announcement("  ", "Welcome", None, None).is_err());
        assert!(validate_announcement(&"x".repeat(256), "Welcome", None, None).is_err());
        assert!(validate_announcement("Open day", " \n", None, None).is_err());
        assert!(
            validate_announcement("Open day", "Welcome", Some(now), Some(now + Duration::days(1)))
                .is_ok()
        );
        assert!(validate_announcement("Open day", "Welcome", Some(now), Some(now)).is_err());
        // 只设置过期时间时不做比较
        assert!(validate_announcement("Open day", "Welcome", None, Some(now)).is_ok());
    }
}

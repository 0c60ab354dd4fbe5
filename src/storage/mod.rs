use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    PaginatedResponse,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
    contact::{entities::ContactInfo, requests::UpdateContactRequest},
    enrollment::{
        entities::{EnrollmentCategory, EnrollmentProcess, EnrollmentRequirement},
        requests::{
            CreateCategoryRequest, CreateProcessRequest, CreateRequirementRequest,
            UpdateCategoryRequest, UpdateProcessRequest, UpdateRequirementRequest,
        },
    },
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
    },
    gallery::{
        entities::{GalleryComment, GalleryImage, GuestCommentStats},
        requests::{
            CommentListQuery, CreateGalleryImage, GalleryListQuery, NewComment,
            UpdateGalleryImageRequest,
        },
    },
    notifications::{
        entities::{NewNotification, Notification},
        requests::NotificationListQuery,
    },
    pages::{entities::PageContent, requests::UpsertSectionRequest},
    principal::{
        entities::{PrincipalAward, PrincipalProfile},
        requests::{CreateAwardRequest, UpdateAwardRequest, UpsertPrincipalRequest},
    },
    programs::{
        entities::SpecialProgram,
        requests::{CreateProgramRequest, ProgramListQuery, UpdateProgramRequest},
    },
    search::SearchCandidate,
    staff::{
        entities::StaffProfile,
        requests::{CreateStaffRequest, StaffListQuery, UpdateStaffRequest},
    },
    themes::{
        entities::SiteTheme,
        requests::{CreateThemeRequest, UpdateThemeRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListQuery},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 后台账号
    // 创建账号（password 字段为已哈希的密码）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取账号
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;

    /// 公告
    async fn create_announcement(&self, req: CreateAnnouncementRequest) -> Result<Announcement>;
    // include_trashed 为 false 时不返回已软删除的公告
    async fn get_announcement_by_id(
        &self,
        id: i64,
        include_trashed: bool,
    ) -> Result<Option<Announcement>>;
    // 仅当公告处于 active 作用域内时返回
    async fn get_active_announcement(&self, id: i64) -> Result<Option<Announcement>>;
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<PaginatedResponse<Announcement>>;
    async fn list_latest_announcements(&self, limit: u64) -> Result<Vec<Announcement>>;
    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    async fn soft_delete_announcement(&self, id: i64) -> Result<bool>;
    async fn restore_announcement(&self, id: i64) -> Result<bool>;
    async fn force_delete_announcement(&self, id: i64) -> Result<bool>;

    /// 活动
    async fn create_event(&self, req: CreateEventRequest) -> Result<Event>;
    async fn get_event_by_id(&self, id: i64, only_active: bool) -> Result<Option<Event>>;
    async fn list_events_with_pagination(
        &self,
        query: EventListQuery,
    ) -> Result<PaginatedResponse<Event>>;
    // 与 [range_start, range_end] 有交集的公开活动
    async fn list_events_overlapping(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Vec<Event>>;
    async fn update_event(&self, id: i64, update: UpdateEventRequest) -> Result<Option<Event>>;
    async fn soft_delete_event(&self, id: i64) -> Result<bool>;
    async fn restore_event(&self, id: i64) -> Result<bool>;

    /// 相册
    async fn create_gallery_image(&self, req: CreateGalleryImage) -> Result<GalleryImage>;
    async fn get_gallery_image_by_id(
        &self,
        id: i64,
        only_active: bool,
    ) -> Result<Option<GalleryImage>>;
    async fn list_gallery_images_with_pagination(
        &self,
        query: GalleryListQuery,
    ) -> Result<PaginatedResponse<GalleryImage>>;
    async fn list_gallery_categories(&self) -> Result<Vec<String>>;
    async fn update_gallery_image(
        &self,
        id: i64,
        update: UpdateGalleryImageRequest,
    ) -> Result<Option<GalleryImage>>;
    async fn soft_delete_gallery_image(&self, id: i64) -> Result<bool>;
    async fn restore_gallery_image(&self, id: i64) -> Result<bool>;

    /// 相册评论
    async fn count_approved_comments(&self, image_id: i64) -> Result<u64>;
    // 访客评论统计，day_start 为当日 UTC 零点
    async fn get_guest_comment_stats(
        &self,
        image_id: i64,
        guest_id: &str,
        browser_fingerprint: Option<&str>,
        day_start: chrono::DateTime<chrono::Utc>,
    ) -> Result<GuestCommentStats>;
    async fn create_comment(&self, comment: NewComment) -> Result<GalleryComment>;
    async fn list_comments_with_pagination(
        &self,
        query: CommentListQuery,
    ) -> Result<PaginatedResponse<GalleryComment>>;
    async fn approve_comment(&self, id: i64) -> Result<Option<GalleryComment>>;
    async fn delete_comment(&self, id: i64) -> Result<bool>;

    /// 教职工
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<StaffProfile>;
    async fn get_staff_by_id(&self, id: i64, only_active: bool) -> Result<Option<StaffProfile>>;
    async fn list_staff_with_pagination(
        &self,
        query: StaffListQuery,
    ) -> Result<PaginatedResponse<StaffProfile>>;
    async fn list_staff_departments(&self) -> Result<Vec<String>>;
    async fn update_staff(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<StaffProfile>>;
    async fn delete_staff(&self, id: i64) -> Result<bool>;

    /// 校长信息
    async fn get_principal(&self, only_active: bool) -> Result<Option<PrincipalProfile>>;
    async fn upsert_principal(&self, req: UpsertPrincipalRequest) -> Result<PrincipalProfile>;
    // 按年份倒序、sort_order 正序
    async fn list_principal_awards(&self, principal_id: i64) -> Result<Vec<PrincipalAward>>;
    async fn create_principal_award(
        &self,
        principal_id: i64,
        req: CreateAwardRequest,
    ) -> Result<PrincipalAward>;
    async fn update_principal_award(
        &self,
        id: i64,
        update: UpdateAwardRequest,
    ) -> Result<Option<PrincipalAward>>;
    async fn delete_principal_award(&self, id: i64) -> Result<bool>;

    /// 招生指南
    async fn list_enrollment_categories(&self, only_active: bool)
    -> Result<Vec<EnrollmentCategory>>;
    async fn get_enrollment_category(&self, id: i64) -> Result<Option<EnrollmentCategory>>;
    async fn create_enrollment_category(
        &self,
        req: CreateCategoryRequest,
    ) -> Result<EnrollmentCategory>;
    async fn update_enrollment_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<EnrollmentCategory>>;
    // 级联删除该类别下的要求
    async fn delete_enrollment_category(&self, id: i64) -> Result<bool>;
    async fn list_enrollment_requirements(&self) -> Result<Vec<EnrollmentRequirement>>;
    async fn create_enrollment_requirement(
        &self,
        req: CreateRequirementRequest,
    ) -> Result<EnrollmentRequirement>;
    async fn update_enrollment_requirement(
        &self,
        id: i64,
        update: UpdateRequirementRequest,
    ) -> Result<Option<EnrollmentRequirement>>;
    async fn delete_enrollment_requirement(&self, id: i64) -> Result<bool>;
    async fn list_enrollment_processes(&self, only_active: bool)
    -> Result<Vec<EnrollmentProcess>>;
    async fn create_enrollment_process(
        &self,
        req: CreateProcessRequest,
    ) -> Result<EnrollmentProcess>;
    async fn update_enrollment_process(
        &self,
        id: i64,
        update: UpdateProcessRequest,
    ) -> Result<Option<EnrollmentProcess>>;
    async fn delete_enrollment_process(&self, id: i64) -> Result<bool>;

    /// 特色项目
    async fn create_program(&self, req: CreateProgramRequest) -> Result<SpecialProgram>;
    async fn get_program_by_id(&self, id: i64, only_active: bool)
    -> Result<Option<SpecialProgram>>;
    async fn list_programs_with_pagination(
        &self,
        query: ProgramListQuery,
    ) -> Result<PaginatedResponse<SpecialProgram>>;
    async fn update_program(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<SpecialProgram>>;
    async fn delete_program(&self, id: i64) -> Result<bool>;

    /// 页面内容与联系方式
    async fn list_page_sections(&self, page: &str, only_active: bool)
    -> Result<Vec<PageContent>>;
    async fn upsert_page_section(
        &self,
        page: &str,
        section_key: &str,
        req: UpsertSectionRequest,
    ) -> Result<PageContent>;
    async fn delete_page_section(&self, page: &str, section_key: &str) -> Result<bool>;
    async fn get_contact_info(&self) -> Result<Option<ContactInfo>>;
    async fn update_contact_info(&self, req: UpdateContactRequest) -> Result<ContactInfo>;

    /// 站点主题
    async fn list_themes(&self) -> Result<Vec<SiteTheme>>;
    async fn get_theme_by_id(&self, id: i64) -> Result<Option<SiteTheme>>;
    async fn get_theme_by_name(&self, name: &str) -> Result<Option<SiteTheme>>;
    async fn get_active_theme(&self) -> Result<Option<SiteTheme>>;
    async fn create_theme(&self, req: CreateThemeRequest) -> Result<SiteTheme>;
    async fn update_theme(&self, id: i64, update: UpdateThemeRequest)
    -> Result<Option<SiteTheme>>;
    // 事务内激活指定主题并停用其他主题
    async fn activate_theme(&self, id: i64) -> Result<Option<SiteTheme>>;
    async fn delete_theme(&self, id: i64) -> Result<bool>;

    /// 后台通知
    async fn create_notification(&self, req: NewNotification) -> Result<Notification>;
    async fn list_notifications_with_pagination(
        &self,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>>;
    async fn count_unread_notifications(&self) -> Result<u64>;
    async fn mark_notification_read(&self, id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self) -> Result<u64>;
    async fn delete_notification(&self, id: i64) -> Result<bool>;

    /// 全站搜索候选（各表按自身顺序，不区分大小写，不截断）
    async fn search_candidates(&self, term: &str) -> Result<Vec<SearchCandidate>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

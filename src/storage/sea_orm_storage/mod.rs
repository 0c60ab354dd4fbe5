//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod comments;
mod enrollment;
mod events;
mod gallery;
mod notifications;
mod pages;
mod principal;
mod programs;
mod search;
mod staff;
mod themes;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSiteError};
use crate::models::TrashedFilter;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter, Select,
};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSiteError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已建立的连接（迁移需由调用方负责）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSiteError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSiteError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSiteError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSiteError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 软删除作用域：默认排除已删除，`only` 仅已删除，`with` 不过滤
pub(super) fn trashed_scope<E>(
    select: Select<E>,
    deleted_at: E::Column,
    trashed: Option<TrashedFilter>,
) -> Select<E>
where
    E: EntityTrait,
{
    match trashed {
        None => select.filter(deleted_at.is_null()),
        Some(TrashedFilter::Only) => select.filter(deleted_at.is_not_null()),
        Some(TrashedFilter::With) => select,
    }
}

pub(super) fn db_error(action: &str) -> impl FnOnce(sea_orm::DbErr) -> SchoolSiteError + '_ {
    move |e| SchoolSiteError::database_operation(format!("{action}失败: {e}"))
}

#[cfg(test)]
pub(crate) async fn memory_storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // 内存库每个连接独立，必须固定为单连接
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage::from_connection(db)
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 公告模块
    async fn create_announcement(&self, req: CreateAnnouncementRequest) -> Result<Announcement> {
        self.create_announcement_impl(req).await
    }

    async fn get_announcement_by_id(
        &self,
        id: i64,
        include_trashed: bool,
    ) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(id, include_trashed).await
    }

    async fn get_active_announcement(&self, id: i64) -> Result<Option<Announcement>> {
        self.get_active_announcement_impl(id).await
    }

    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<PaginatedResponse<Announcement>> {
        self.list_announcements_with_pagination_impl(query).await
    }

    async fn list_latest_announcements(&self, limit: u64) -> Result<Vec<Announcement>> {
        self.list_latest_announcements_impl(limit).await
    }

    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(id, update).await
    }

    async fn soft_delete_announcement(&self, id: i64) -> Result<bool> {
        self.soft_delete_announcement_impl(id).await
    }

    async fn restore_announcement(&self, id: i64) -> Result<bool> {
        self.restore_announcement_impl(id).await
    }

    async fn force_delete_announcement(&self, id: i64) -> Result<bool> {
        self.force_delete_announcement_impl(id).await
    }

    // 活动模块
    async fn create_event(&self, req: CreateEventRequest) -> Result<Event> {
        self.create_event_impl(req).await
    }

    async fn get_event_by_id(&self, id: i64, only_active: bool) -> Result<Option<Event>> {
        self.get_event_by_id_impl(id, only_active).await
    }

    async fn list_events_with_pagination(
        &self,
        query: EventListQuery,
    ) -> Result<PaginatedResponse<Event>> {
        self.list_events_with_pagination_impl(query).await
    }

    async fn list_events_overlapping(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Vec<Event>> {
        self.list_events_overlapping_impl(range_start, range_end)
            .await
    }

    async fn update_event(&self, id: i64, update: UpdateEventRequest) -> Result<Option<Event>> {
        self.update_event_impl(id, update).await
    }

    async fn soft_delete_event(&self, id: i64) -> Result<bool> {
        self.soft_delete_event_impl(id).await
    }

    async fn restore_event(&self, id: i64) -> Result<bool> {
        self.restore_event_impl(id).await
    }

    // 相册模块
    async fn create_gallery_image(&self, req: CreateGalleryImage) -> Result<GalleryImage> {
        self.create_gallery_image_impl(req).await
    }

    async fn get_gallery_image_by_id(
        &self,
        id: i64,
        only_active: bool,
    ) -> Result<Option<GalleryImage>> {
        self.get_gallery_image_by_id_impl(id, only_active).await
    }

    async fn list_gallery_images_with_pagination(
        &self,
        query: GalleryListQuery,
    ) -> Result<PaginatedResponse<GalleryImage>> {
        self.list_gallery_images_with_pagination_impl(query).await
    }

    async fn list_gallery_categories(&self) -> Result<Vec<String>> {
        self.list_gallery_categories_impl().await
    }

    async fn update_gallery_image(
        &self,
        id: i64,
        update: UpdateGalleryImageRequest,
    ) -> Result<Option<GalleryImage>> {
        self.update_gallery_image_impl(id, update).await
    }

    async fn soft_delete_gallery_image(&self, id: i64) -> Result<bool> {
        self.soft_delete_gallery_image_impl(id).await
    }

    async fn restore_gallery_image(&self, id: i64) -> Result<bool> {
        self.restore_gallery_image_impl(id).await
    }

    // 评论模块
    async fn count_approved_comments(&self, image_id: i64) -> Result<u64> {
        self.count_approved_comments_impl(image_id).await
    }

    async fn get_guest_comment_stats(
        &self,
        image_id: i64,
        guest_id: &str,
        browser_fingerprint: Option<&str>,
        day_start: chrono::DateTime<chrono::Utc>,
    ) -> Result<GuestCommentStats> {
        self.get_guest_comment_stats_impl(image_id, guest_id, browser_fingerprint, day_start)
            .await
    }

    async fn create_comment(&self, comment: NewComment) -> Result<GalleryComment> {
        self.create_comment_impl(comment).await
    }

    async fn list_comments_with_pagination(
        &self,
        query: CommentListQuery,
    ) -> Result<PaginatedResponse<GalleryComment>> {
        self.list_comments_with_pagination_impl(query).await
    }

    async fn approve_comment(&self, id: i64) -> Result<Option<GalleryComment>> {
        self.approve_comment_impl(id).await
    }

    async fn delete_comment(&self, id: i64) -> Result<bool> {
        self.delete_comment_impl(id).await
    }

    // 教职工模块
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<StaffProfile> {
        self.create_staff_impl(req).await
    }

    async fn get_staff_by_id(&self, id: i64, only_active: bool) -> Result<Option<StaffProfile>> {
        self.get_staff_by_id_impl(id, only_active).await
    }

    async fn list_staff_with_pagination(
        &self,
        query: StaffListQuery,
    ) -> Result<PaginatedResponse<StaffProfile>> {
        self.list_staff_with_pagination_impl(query).await
    }

    async fn list_staff_departments(&self) -> Result<Vec<String>> {
        self.list_staff_departments_impl().await
    }

    async fn update_staff(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<StaffProfile>> {
        self.update_staff_impl(id, update).await
    }

    async fn delete_staff(&self, id: i64) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    // 校长模块
    async fn get_principal(&self, only_active: bool) -> Result<Option<PrincipalProfile>> {
        self.get_principal_impl(only_active).await
    }

    async fn upsert_principal(&self, req: UpsertPrincipalRequest) -> Result<PrincipalProfile> {
        self.upsert_principal_impl(req).await
    }

    async fn list_principal_awards(&self, principal_id: i64) -> Result<Vec<PrincipalAward>> {
        self.list_principal_awards_impl(principal_id).await
    }

    async fn create_principal_award(
        &self,
        principal_id: i64,
        req: CreateAwardRequest,
    ) -> Result<PrincipalAward> {
        self.create_principal_award_impl(principal_id, req).await
    }

    async fn update_principal_award(
        &self,
        id: i64,
        update: UpdateAwardRequest,
    ) -> Result<Option<PrincipalAward>> {
        self.update_principal_award_impl(id, update).await
    }

    async fn delete_principal_award(&self, id: i64) -> Result<bool> {
        self.delete_principal_award_impl(id).await
    }

    // 招生模块
    async fn list_enrollment_categories(
        &self,
        only_active: bool,
    ) -> Result<Vec<EnrollmentCategory>> {
        self.list_enrollment_categories_impl(only_active).await
    }

    async fn get_enrollment_category(&self, id: i64) -> Result<Option<EnrollmentCategory>> {
        self.get_enrollment_category_impl(id).await
    }

    async fn create_enrollment_category(
        &self,
        req: CreateCategoryRequest,
    ) -> Result<EnrollmentCategory> {
        self.create_enrollment_category_impl(req).await
    }

    async fn update_enrollment_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<EnrollmentCategory>> {
        self.update_enrollment_category_impl(id, update).await
    }

    async fn delete_enrollment_category(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_category_impl(id).await
    }

    async fn list_enrollment_requirements(&self) -> Result<Vec<EnrollmentRequirement>> {
        self.list_enrollment_requirements_impl().await
    }

    async fn create_enrollment_requirement(
        &self,
        req: CreateRequirementRequest,
    ) -> Result<EnrollmentRequirement> {
        self.create_enrollment_requirement_impl(req).await
    }

    async fn update_enrollment_requirement(
        &self,
        id: i64,
        update: UpdateRequirementRequest,
    ) -> Result<Option<EnrollmentRequirement>> {
        self.update_enrollment_requirement_impl(id, update).await
    }

    async fn delete_enrollment_requirement(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_requirement_impl(id).await
    }

    async fn list_enrollment_processes(
        &self,
        only_active: bool,
    ) -> Result<Vec<EnrollmentProcess>> {
        self.list_enrollment_processes_impl(only_active).await
    }

    async fn create_enrollment_process(
        &self,
        req: CreateProcessRequest,
    ) -> Result<EnrollmentProcess> {
        self.create_enrollment_process_impl(req).await
    }

    async fn update_enrollment_process(
        &self,
        id: i64,
        update: UpdateProcessRequest,
    ) -> Result<Option<EnrollmentProcess>> {
        self.update_enrollment_process_impl(id, update).await
    }

    async fn delete_enrollment_process(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_process_impl(id).await
    }

    // 特色项目模块
    async fn create_program(&self, req: CreateProgramRequest) -> Result<SpecialProgram> {
        self.create_program_impl(req).await
    }

    async fn get_program_by_id(
        &self,
        id: i64,
        only_active: bool,
    ) -> Result<Option<SpecialProgram>> {
        self.get_program_by_id_impl(id, only_active).await
    }

    async fn list_programs_with_pagination(
        &self,
        query: ProgramListQuery,
    ) -> Result<PaginatedResponse<SpecialProgram>> {
        self.list_programs_with_pagination_impl(query).await
    }

    async fn update_program(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<SpecialProgram>> {
        self.update_program_impl(id, update).await
    }

    async fn delete_program(&self, id: i64) -> Result<bool> {
        self.delete_program_impl(id).await
    }

    // 页面与联系方式模块
    async fn list_page_sections(
        &self,
        page: &str,
        only_active: bool,
    ) -> Result<Vec<PageContent>> {
        self.list_page_sections_impl(page, only_active).await
    }

    async fn upsert_page_section(
        &self,
        page: &str,
        section_key: &str,
        req: UpsertSectionRequest,
    ) -> Result<PageContent> {
        self.upsert_page_section_impl(page, section_key, req).await
    }

    async fn delete_page_section(&self, page: &str, section_key: &str) -> Result<bool> {
        self.delete_page_section_impl(page, section_key).await
    }

    async fn get_contact_info(&self) -> Result<Option<ContactInfo>> {
        self.get_contact_info_impl().await
    }

    async fn update_contact_info(&self, req: UpdateContactRequest) -> Result<ContactInfo> {
        self.update_contact_info_impl(req).await
    }

    // 主题模块
    async fn list_themes(&self) -> Result<Vec<SiteTheme>> {
        self.list_themes_impl().await
    }

    async fn get_theme_by_id(&self, id: i64) -> Result<Option<SiteTheme>> {
        self.get_theme_by_id_impl(id).await
    }

    async fn get_theme_by_name(&self, name: &str) -> Result<Option<SiteTheme>> {
        self.get_theme_by_name_impl(name).await
    }

    async fn get_active_theme(&self) -> Result<Option<SiteTheme>> {
        self.get_active_theme_impl().await
    }

    async fn create_theme(&self, req: CreateThemeRequest) -> Result<SiteTheme> {
        self.create_theme_impl(req).await
    }

    async fn update_theme(
        &self,
        id: i64,
        update: UpdateThemeRequest,
    ) -> Result<Option<SiteTheme>> {
        self.update_theme_impl(id, update).await
    }

    async fn activate_theme(&self, id: i64) -> Result<Option<SiteTheme>> {
        self.activate_theme_impl(id).await
    }

    async fn delete_theme(&self, id: i64) -> Result<bool> {
        self.delete_theme_impl(id).await
    }

    // 通知模块
    async fn create_notification(&self, req: NewNotification) -> Result<Notification> {
        self.create_notification_impl(req).await
    }

    async fn list_notifications_with_pagination(
        &self,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>> {
        self.list_notifications_with_pagination_impl(query).await
    }

    async fn count_unread_notifications(&self) -> Result<u64> {
        self.count_unread_notifications_impl().await
    }

    async fn mark_notification_read(&self, id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id).await
    }

    async fn mark_all_notifications_read(&self) -> Result<u64> {
        self.mark_all_notifications_read_impl().await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }

    // 搜索模块
    async fn search_candidates(&self, term: &str) -> Result<Vec<SearchCandidate>> {
        self.search_candidates_impl(term).await
    }
}

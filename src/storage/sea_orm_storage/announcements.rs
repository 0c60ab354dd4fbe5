//! 公告存储操作

use super::{SeaOrmStorage, db_error, trashed_scope};
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
};
use crate::utils::contains_pattern;
use sea_orm::sea_query::{Expr, NullOrdering, Order};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

/// active 作用域：启用、未删除、已发布且未过期
pub(super) fn active_scope(select: Select<Announcements>, now: i64) -> Select<Announcements> {
    select
        .filter(Column::IsActive.eq(true))
        .filter(Column::DeletedAt.is_null())
        .filter(
            Condition::any()
                .add(Column::PublishedAt.is_null())
                .add(Column::PublishedAt.lte(now)),
        )
        .filter(
            Condition::any()
                .add(Column::ExpiresAt.is_null())
                .add(Column::ExpiresAt.gt(now)),
        )
}

/// ordered 作用域：置顶优先，其次发布时间倒序，未设发布时间的排在最后
pub(super) fn ordered_scope(select: Select<Announcements>) -> Select<Announcements> {
    select
        .order_by_desc(Column::IsPinned)
        .order_by_with_nulls(Column::PublishedAt, Order::Desc, NullOrdering::Last)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            content: Set(req.content),
            announcement_type: Set(req.announcement_type.to_string()),
            is_active: Set(req.is_active),
            is_pinned: Set(req.is_pinned),
            published_at: Set(req.published_at.map(|t| t.timestamp())),
            expires_at: Set(req.expires_at.map(|t| t.timestamp())),
            author_id: Set(req.author_id),
            image_path: Set(req.image_path),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建公告"))?;

        Ok(result.into_announcement())
    }

    pub async fn get_announcement_by_id_impl(
        &self,
        id: i64,
        include_trashed: bool,
    ) -> Result<Option<Announcement>> {
        let mut select = Announcements::find_by_id(id);
        if !include_trashed {
            select = select.filter(Column::DeletedAt.is_null());
        }

        let result = select.one(&self.db).await.map_err(db_error("查询公告"))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    pub async fn get_active_announcement_impl(&self, id: i64) -> Result<Option<Announcement>> {
        let now = chrono::Utc::now().timestamp();
        let result = active_scope(Announcements::find_by_id(id), now)
            .one(&self.db)
            .await
            .map_err(db_error("查询公告"))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 分页列出公告
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<PaginatedResponse<Announcement>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = if query.only_active {
            active_scope(Announcements::find(), chrono::Utc::now().timestamp())
        } else {
            trashed_scope(Announcements::find(), Column::DeletedAt, query.trashed)
        };

        // 类型筛选
        if let Some(announcement_type) = query.announcement_type {
            select = select.filter(Column::AnnouncementType.eq(announcement_type.as_str()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(contains_pattern(term)))
                    .add(Column::Content.like(contains_pattern(term))),
            );
        }

        let paginator = ordered_scope(select).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询公告总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询公告页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询公告列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_announcement()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_latest_announcements_impl(&self, limit: u64) -> Result<Vec<Announcement>> {
        let now = chrono::Utc::now().timestamp();
        let items = ordered_scope(active_scope(Announcements::find(), now))
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_error("查询最新公告"))?;

        Ok(items.into_iter().map(|m| m.into_announcement()).collect())
    }

    pub async fn update_announcement_impl(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        let Some(existing) = Announcements::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_error("查询公告"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        if let Some(announcement_type) = update.announcement_type {
            model.announcement_type = Set(announcement_type.to_string());
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(is_pinned) = update.is_pinned {
            model.is_pinned = Set(is_pinned);
        }
        if let Some(published_at) = update.published_at {
            model.published_at = Set(published_at.map(|t| t.timestamp()));
        }
        if let Some(expires_at) = update.expires_at {
            model.expires_at = Set(expires_at.map(|t| t.timestamp()));
        }
        if let Some(image_path) = update.image_path {
            model.image_path = Set(image_path);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新公告"))?;

        Ok(Some(result.into_announcement()))
    }

    pub async fn soft_delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Announcements::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_error("删除公告"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn restore_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Option::<i64>::None))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_not_null())
            .exec(&self.db)
            .await
            .map_err(db_error("恢复公告"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn force_delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("彻底删除公告"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::TrashedFilter;
    use crate::models::announcements::{
        entities::AnnouncementType,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    };
    use chrono::{Duration, Utc};

    fn request(title: &str) -> CreateAnnouncementRequest {
        CreateAnnouncementRequest {
            title: title.to_string(),
            content: format!("{title} body"),
            announcement_type: AnnouncementType::General,
            is_active: true,
            is_pinned: false,
            published_at: None,
            expires_at: None,
            image_path: None,
            author_id: None,
        }
    }

    fn public_query() -> AnnouncementListQuery {
        AnnouncementListQuery {
            page: 1,
            size: 10,
            only_active: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_soft_delete_hides_and_restore_returns() {
        let storage = memory_storage().await;
        let a = storage
            .create_announcement_impl(request("Sports day"))
            .await
            .unwrap();

        assert!(storage.soft_delete_announcement_impl(a.id).await.unwrap());
        let listed = storage
            .list_announcements_with_pagination_impl(public_query())
            .await
            .unwrap();
        assert!(listed.items.is_empty());
        assert!(storage.get_active_announcement_impl(a.id).await.unwrap().is_none());

        let trashed = storage
            .list_announcements_with_pagination_impl(AnnouncementListQuery {
                page: 1,
                size: 10,
                trashed: Some(TrashedFilter::Only),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(trashed.items.len(), 1);

        assert!(storage.restore_announcement_impl(a.id).await.unwrap());
        assert!(!storage.restore_announcement_impl(a.id).await.unwrap());
        let listed = storage
            .list_announcements_with_pagination_impl(public_query())
            .await
            .unwrap();
        assert_eq!(listed.items.len(), 1);
    }

    #[tokio::test]
    async fn test_active_scope_and_pinned_ordering() {
        let storage = memory_storage().await;
        let now = Utc::now();

        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                published_at: Some(now + Duration::days(1)),
                ..request("Scheduled")
            })
            .await
            .unwrap();
        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                expires_at: Some(now - Duration::days(1)),
                ..request("Expired")
            })
            .await
            .unwrap();
        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                published_at: Some(now - Duration::days(2)),
                ..request("Older")
            })
            .await
            .unwrap();
        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                is_pinned: true,
                published_at: Some(now - Duration::days(5)),
                ..request("Pinned")
            })
            .await
            .unwrap();

        let latest = storage.list_latest_announcements_impl(5).await.unwrap();
        let titles: Vec<_> = latest.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Pinned", "Older"]);
    }

    #[tokio::test]
    async fn test_update_clears_nullable_fields() {
        let storage = memory_storage().await;
        let a = storage
            .create_announcement_impl(CreateAnnouncementRequest {
                image_path: Some("announcements/a.png".into()),
                ..request("With image")
            })
            .await
            .unwrap();

        let updated = storage
            .update_announcement_impl(
                a.id,
                UpdateAnnouncementRequest {
                    image_path: Some(None),
                    is_pinned: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.image_path.is_none());
        assert!(updated.is_pinned);
        assert_eq!(updated.title, "With image");
    }

    #[tokio::test]
    async fn test_ordering_puts_undated_last() {
        let storage = memory_storage().await;
        let now = Utc::now();

        storage
            .create_announcement_impl(request("Undated"))
            .await
            .unwrap();
        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                published_at: Some(now - Duration::days(3)),
                ..request("Older")
            })
            .await
            .unwrap();
        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                published_at: Some(now - Duration::days(1)),
                ..request("Newer")
            })
            .await
            .unwrap();
        storage
            .create_announcement_impl(CreateAnnouncementRequest {
                is_pinned: true,
                ..request("Pinned")
            })
            .await
            .unwrap();

        let listed = storage
            .list_announcements_with_pagination_impl(public_query())
            .await
            .unwrap();
        let titles: Vec<_> = listed.items.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Pinned", "Newer", "Older", "Undated"]);
    }

    #[test]
    fn test_ordering_nulls_are_explicit_on_postgres() {
        use super::{Announcements, ordered_scope};
        use sea_orm::{DbBackend, EntityTrait, QueryTrait};

        let sql = ordered_scope(Announcements::find())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""published_at" DESC NULLS LAST"#), "{sql}");
    }
}

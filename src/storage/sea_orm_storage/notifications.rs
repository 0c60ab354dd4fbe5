//! 后台通知存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    notifications::{
        entities::{NewNotification, Notification},
        requests::NotificationListQuery,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    pub async fn create_notification_impl(&self, req: NewNotification) -> Result<Notification> {
        let model = ActiveModel {
            notification_type: Set(req.notification_type.to_string()),
            title: Set(req.title),
            message: Set(req.message),
            link: Set(req.link),
            data: Set(serde_json::to_string(&req.data)?),
            is_read: Set(false),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建通知"))?;

        Ok(result.into_notification())
    }

    pub async fn list_notifications_with_pagination_impl(
        &self,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Notifications::find();
        if query.unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        let select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询通知总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询通知页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询通知列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_notification()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn count_unread_notifications_impl(&self) -> Result<u64> {
        Notifications::find()
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(db_error("统计未读通知"))
    }

    pub async fn mark_notification_read_impl(&self, id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("标记通知已读"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn mark_all_notifications_read_impl(&self) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_error("标记全部通知已读"))?;

        Ok(result.rows_affected)
    }

    pub async fn delete_notification_impl(&self, id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除通知"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::notifications::{
        entities::{NewNotification, NotificationType},
        requests::NotificationListQuery,
    };
    use serde_json::json;

    fn comment_notification(title: &str) -> NewNotification {
        NewNotification {
            notification_type: NotificationType::Comment,
            title: title.to_string(),
            message: "A guest left a comment".to_string(),
            link: Some("/admin/comments".to_string()),
            data: json!({ "comment_id": 1 }),
        }
    }

    #[tokio::test]
    async fn test_unread_lifecycle() {
        let storage = memory_storage().await;
        let first = storage
            .create_notification_impl(comment_notification("first"))
            .await
            .unwrap();
        storage
            .create_notification_impl(comment_notification("second"))
            .await
            .unwrap();
        assert_eq!(first.data["comment_id"], 1);
        assert_eq!(storage.count_unread_notifications_impl().await.unwrap(), 2);

        assert!(storage.mark_notification_read_impl(first.id).await.unwrap());
        assert_eq!(storage.count_unread_notifications_impl().await.unwrap(), 1);

        let unread = storage
            .list_notifications_with_pagination_impl(NotificationListQuery {
                page: 1,
                size: 10,
                unread_only: true,
            })
            .await
            .unwrap();
        assert_eq!(unread.items.len(), 1);
        assert_eq!(unread.items[0].title, "second");

        assert_eq!(storage.mark_all_notifications_read_impl().await.unwrap(), 1);
        assert_eq!(storage.count_unread_notifications_impl().await.unwrap(), 0);

        assert!(storage.delete_notification_impl(first.id).await.unwrap());
        assert!(!storage.mark_notification_read_impl(first.id).await.unwrap());
    }
}

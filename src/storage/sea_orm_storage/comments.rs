//! 相册评论存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::gallery_comments::{ActiveModel, Column, Entity as GalleryComments};
use crate::entity::timestamp_to_datetime;
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    gallery::{
        entities::{CommentStatusFilter, GalleryComment, GuestCommentStats},
        requests::{CommentListQuery, NewComment},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

/// 访客身份：guest_id 相同，或提供了指纹且指纹相同
fn guest_condition(guest_id: &str, browser_fingerprint: Option<&str>) -> Condition {
    let mut condition = Condition::any().add(Column::GuestId.eq(guest_id));
    if let Some(fingerprint) = browser_fingerprint
        && !fingerprint.is_empty()
    {
        condition = condition.add(Column::BrowserFingerprint.eq(fingerprint));
    }
    condition
}

impl SeaOrmStorage {
    pub async fn count_approved_comments_impl(&self, image_id: i64) -> Result<u64> {
        GalleryComments::find()
            .filter(Column::GalleryImageId.eq(image_id))
            .filter(Column::IsApproved.eq(true))
            .count(&self.db)
            .await
            .map_err(db_error("统计评论数量"))
    }

    /// 汇总访客的评论记录，供发表前的限流判断
    pub async fn get_guest_comment_stats_impl(
        &self,
        image_id: i64,
        guest_id: &str,
        browser_fingerprint: Option<&str>,
        day_start: chrono::DateTime<chrono::Utc>,
    ) -> Result<GuestCommentStats> {
        let guest = guest_condition(guest_id, browser_fingerprint);

        let last = GalleryComments::find()
            .filter(guest.clone())
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(db_error("查询访客最近评论"))?;

        let on_image = GalleryComments::find()
            .filter(guest.clone())
            .filter(Column::GalleryImageId.eq(image_id))
            .count(&self.db)
            .await
            .map_err(db_error("统计访客图片评论"))?;

        let today = GalleryComments::find()
            .filter(guest)
            .filter(Column::CreatedAt.gte(day_start.timestamp()))
            .count(&self.db)
            .await
            .map_err(db_error("统计访客当日评论"))?;

        Ok(GuestCommentStats {
            last_comment_at: last.map(|m| timestamp_to_datetime(m.created_at)),
            on_image,
            today,
        })
    }

    pub async fn create_comment_impl(&self, comment: NewComment) -> Result<GalleryComment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            gallery_image_id: Set(comment.gallery_image_id),
            guest_name: Set(comment.guest_name),
            guest_id: Set(comment.guest_id),
            browser_fingerprint: Set(comment.browser_fingerprint),
            ip_address: Set(comment.ip_address),
            content: Set(comment.content),
            is_approved: Set(comment.is_approved),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建评论"))?;

        Ok(result.into_comment())
    }

    pub async fn list_comments_with_pagination_impl(
        &self,
        query: CommentListQuery,
    ) -> Result<PaginatedResponse<GalleryComment>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = GalleryComments::find();

        if let Some(image_id) = query.image_id {
            select = select.filter(Column::GalleryImageId.eq(image_id));
        }

        select = match query.status {
            CommentStatusFilter::Pending => select.filter(Column::IsApproved.eq(false)),
            CommentStatusFilter::Approved => select.filter(Column::IsApproved.eq(true)),
            CommentStatusFilter::All => select,
        };

        select = if query.oldest_first {
            select
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id)
        } else {
            select
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id)
        };

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询评论总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询评论页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询评论列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_comment()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn approve_comment_impl(&self, id: i64) -> Result<Option<GalleryComment>> {
        let result = GalleryComments::update_many()
            .col_expr(Column::IsApproved, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("审核评论"))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let comment = GalleryComments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询评论"))?;

        Ok(comment.map(|m| m.into_comment()))
    }

    pub async fn delete_comment_impl(&self, id: i64) -> Result<bool> {
        let result = GalleryComments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除评论"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::gallery::tests::create_image;
    use super::super::memory_storage;
    use crate::models::gallery::{
        entities::CommentStatusFilter,
        requests::{CommentListQuery, NewComment},
    };
    use chrono::{Duration, Utc};

    fn comment(image_id: i64, guest_id: &str, fingerprint: Option<&str>) -> NewComment {
        NewComment {
            gallery_image_id: image_id,
            guest_name: "Visitor".to_string(),
            guest_id: guest_id.to_string(),
            browser_fingerprint: fingerprint.map(str::to_string),
            ip_address: Some("127.0.0.1".to_string()),
            content: "Lovely photo".to_string(),
            is_approved: false,
        }
    }

    #[tokio::test]
    async fn test_guest_stats_count_per_image_and_day() {
        let storage = memory_storage().await;
        let first = create_image(&storage, "one", "events").await;
        let second = create_image(&storage, "two", "events").await;

        storage
            .create_comment_impl(comment(first.id, "guest-a", None))
            .await
            .unwrap();
        storage
            .create_comment_impl(comment(first.id, "guest-a", None))
            .await
            .unwrap();
        storage
            .create_comment_impl(comment(second.id, "guest-a", None))
            .await
            .unwrap();
        storage
            .create_comment_impl(comment(first.id, "guest-b", None))
            .await
            .unwrap();

        let day_start = Utc::now() - Duration::hours(1);
        let stats = storage
            .get_guest_comment_stats_impl(first.id, "guest-a", None, day_start)
            .await
            .unwrap();
        assert_eq!(stats.on_image, 2);
        assert_eq!(stats.today, 3);
        assert!(stats.last_comment_at.is_some());

        let tomorrow = Utc::now() + Duration::days(1);
        let stats = storage
            .get_guest_comment_stats_impl(first.id, "guest-a", None, tomorrow)
            .await
            .unwrap();
        assert_eq!(stats.today, 0);
    }

    #[tokio::test]
    async fn test_fingerprint_links_guest_ids() {
        let storage = memory_storage().await;
        let image = create_image(&storage, "hall", "campus").await;
        storage
            .create_comment_impl(comment(image.id, "old-id", Some("fp-1")))
            .await
            .unwrap();

        let stats = storage
            .get_guest_comment_stats_impl(image.id, "new-id", Some("fp-1"), Utc::now())
            .await
            .unwrap();
        assert_eq!(stats.on_image, 1);

        let stats = storage
            .get_guest_comment_stats_impl(image.id, "new-id", None, Utc::now())
            .await
            .unwrap();
        assert_eq!(stats.on_image, 0);
        assert!(stats.last_comment_at.is_none());
    }

    #[tokio::test]
    async fn test_approve_moves_comment_to_public_list() {
        let storage = memory_storage().await;
        let image = create_image(&storage, "lab", "campus").await;
        let created = storage
            .create_comment_impl(comment(image.id, "guest", None))
            .await
            .unwrap();
        assert_eq!(storage.count_approved_comments_impl(image.id).await.unwrap(), 0);

        let approved = storage.approve_comment_impl(created.id).await.unwrap();
        assert!(approved.unwrap().is_approved);
        assert_eq!(storage.count_approved_comments_impl(image.id).await.unwrap(), 1);

        let public = storage
            .list_comments_with_pagination_impl(CommentListQuery {
                page: 1,
                size: 10,
                image_id: Some(image.id),
                status: CommentStatusFilter::Approved,
                oldest_first: true,
            })
            .await
            .unwrap();
        assert_eq!(public.items.len(), 1);

        assert!(storage.approve_comment_impl(9999).await.unwrap().is_none());
    }
}

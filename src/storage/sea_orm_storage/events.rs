//! 活动存储操作
//!
//! 日期列为 `YYYY-MM-DD` 文本，字典序比较即日期比较。

use super::{SeaOrmStorage, db_error, trashed_scope};
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::entity::date_to_text;
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
    },
};
use crate::utils::contains_pattern;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, NullOrdering, Order};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select, Set,
};

pub(super) fn active_scope(select: Select<Events>) -> Select<Events> {
    select
        .filter(Column::IsActive.eq(true))
        .filter(Column::DeletedAt.is_null())
}

/// 与 [range_start, range_end] 有交集：start_date <= range_end 且 (end_date 为空或 end_date >= range_start)
fn overlapping_scope(
    select: Select<Events>,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Select<Events> {
    select
        .filter(Column::StartDate.lte(date_to_text(range_end)))
        .filter(
            Condition::any()
                .add(Column::EndDate.is_null())
                .add(Column::EndDate.gte(date_to_text(range_start))),
        )
}

impl SeaOrmStorage {
    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            location: Set(req.location),
            start_date: Set(date_to_text(req.start_date)),
            end_date: Set(req.end_date.map(date_to_text)),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            category: Set(req.category.to_string()),
            is_active: Set(req.is_active),
            is_featured: Set(req.is_featured),
            created_by: Set(req.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error("创建活动"))?;

        Ok(result.into_event())
    }

    pub async fn get_event_by_id_impl(&self, id: i64, only_active: bool) -> Result<Option<Event>> {
        let select = if only_active {
            active_scope(Events::find_by_id(id))
        } else {
            Events::find_by_id(id).filter(Column::DeletedAt.is_null())
        };

        let result = select.one(&self.db).await.map_err(db_error("查询活动"))?;

        Ok(result.map(|m| m.into_event()))
    }

    /// 分页列出活动
    pub async fn list_events_with_pagination_impl(
        &self,
        query: EventListQuery,
    ) -> Result<PaginatedResponse<Event>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = if query.only_active {
            active_scope(Events::find())
        } else {
            trashed_scope(Events::find(), Column::DeletedAt, query.trashed)
        };

        if let Some(category) = query.category {
            select = select.filter(Column::Category.eq(category.as_str()));
        }

        // coalesce(end_date, start_date) >= 指定日期
        if let Some(day) = query.ends_on_or_after {
            let day = date_to_text(day);
            select = select.filter(
                Condition::any().add(Column::EndDate.gte(day.clone())).add(
                    Condition::all()
                        .add(Column::EndDate.is_null())
                        .add(Column::StartDate.gte(day)),
                ),
            );
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(contains_pattern(term)))
                    .add(Column::Description.like(contains_pattern(term)))
                    .add(Column::Location.like(contains_pattern(term))),
            );
        }

        // 公开列表按开始日期正序（同日全天活动在前），后台列表最近的在前
        select = if query.only_active {
            select
                .order_by_asc(Column::StartDate)
                .order_by_with_nulls(Column::StartTime, Order::Asc, NullOrdering::First)
                .order_by_asc(Column::Id)
        } else {
            select
                .order_by_desc(Column::StartDate)
                .order_by_desc(Column::Id)
        };

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询活动总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询活动页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询活动列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_event()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_events_overlapping_impl(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Vec<Event>> {
        let items = overlapping_scope(active_scope(Events::find()), range_start, range_end)
            .order_by_asc(Column::StartDate)
            .order_by_with_nulls(Column::StartTime, Order::Asc, NullOrdering::First)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询日历活动"))?;

        Ok(items.into_iter().map(|m| m.into_event()).collect())
    }

    pub async fn update_event_impl(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let Some(existing) = Events::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(db_error("查询活动"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(location) = update.location {
            model.location = Set(location);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(date_to_text(start_date));
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.map(date_to_text));
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time);
        }
        if let Some(category) = update.category {
            model.category = Set(category.to_string());
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(is_featured) = update.is_featured {
            model.is_featured = Set(is_featured);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(db_error("更新活动"))?;

        Ok(Some(result.into_event()))
    }

    pub async fn soft_delete_event_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Events::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_error("删除活动"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn restore_event_impl(&self, id: i64) -> Result<bool> {
        let result = Events::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Option::<i64>::None))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_not_null())
            .exec(&self.db)
            .await
            .map_err(db_error("恢复活动"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::events::{
        entities::EventCategory,
        requests::{CreateEventRequest, EventListQuery},
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(title: &str, start: NaiveDate, end: Option<NaiveDate>) -> CreateEventRequest {
        CreateEventRequest {
            title: title.to_string(),
            description: None,
            location: None,
            start_date: start,
            end_date: end,
            start_time: None,
            end_time: None,
            category: EventCategory::Academic,
            is_active: true,
            is_featured: false,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_calendar_overlap_filter() {
        let storage = memory_storage().await;
        let cases = [
            ("inside", date(2024, 3, 10), None),
            ("spans start", date(2024, 2, 25), Some(date(2024, 3, 2))),
            ("spans whole", date(2024, 2, 1), Some(date(2024, 4, 30))),
            ("ends before", date(2024, 2, 10), Some(date(2024, 2, 29))),
            // end_date 为空时谓词只约束开始日期
            ("open ended", date(2024, 2, 29), None),
            ("starts after", date(2024, 4, 1), None),
            ("last day", date(2024, 3, 31), None),
        ];
        for (title, start, end) in cases {
            storage
                .create_event_impl(request(title, start, end))
                .await
                .unwrap();
        }

        let events = storage
            .list_events_overlapping_impl(date(2024, 3, 1), date(2024, 3, 31))
            .await
            .unwrap();
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["spans whole", "spans start", "open ended", "inside", "last day"]
        );
    }

    #[tokio::test]
    async fn test_soft_deleted_event_excluded_from_calendar() {
        let storage = memory_storage().await;
        let event = storage
            .create_event_impl(request("Exam", date(2024, 6, 3), None))
            .await
            .unwrap();
        storage.soft_delete_event_impl(event.id).await.unwrap();

        let events = storage
            .list_events_overlapping_impl(date(2024, 6, 1), date(2024, 6, 30))
            .await
            .unwrap();
        assert!(events.is_empty());

        storage.restore_event_impl(event.id).await.unwrap();
        let events = storage
            .list_events_overlapping_impl(date(2024, 6, 1), date(2024, 6, 30))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn test_upcoming_uses_last_day() {
        let storage = memory_storage().await;
        storage
            .create_event_impl(request("past", date(2024, 1, 1), None))
            .await
            .unwrap();
        storage
            .create_event_impl(request("ongoing", date(2024, 1, 1), Some(date(2024, 1, 20))))
            .await
            .unwrap();
        storage
            .create_event_impl(request("future", date(2024, 2, 1), None))
            .await
            .unwrap();

        let page = storage
            .list_events_with_pagination_impl(EventListQuery {
                page: 1,
                size: 10,
                only_active: true,
                ends_on_or_after: Some(date(2024, 1, 10)),
                ..Default::default()
            })
            .await
            .unwrap();
        let titles: Vec<_> = page.items.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["ongoing", "future"]);
    }

    #[tokio::test]
    async fn test_all_day_events_listed_first_within_a_day() {
        let storage = memory_storage().await;
        let day = date(2099, 5, 20);
        storage
            .create_event_impl(CreateEventRequest {
                start_time: Some("09:00".to_string()),
                ..request("morning assembly", day, None)
            })
            .await
            .unwrap();
        storage
            .create_event_impl(request("field trip", day, None))
            .await
            .unwrap();

        let items = storage
            .list_events_overlapping_impl(date(2099, 5, 1), date(2099, 5, 31))
            .await
            .unwrap();
        let titles: Vec<_> = items.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["field trip", "morning assembly"]);
    }
}

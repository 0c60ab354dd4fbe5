use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::EventCategory;
use crate::models::common::deserialize::{deserialize_nullable, deserialize_optional_bool};
use crate::models::common::{PaginationQuery, TrashedFilter};

// 公开活动列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<EventCategory>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub upcoming: Option<bool>,
}

// 日历月视图查询参数，缺省为当前月份
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

// 后台活动列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct AdminEventQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<EventCategory>,
    pub search: Option<String>,
    pub trashed: Option<TrashedFilter>,
}

// 存储层列表查询
#[derive(Debug, Clone, Default)]
pub struct EventListQuery {
    pub page: u64,
    pub size: u64,
    pub category: Option<EventCategory>,
    pub search: Option<String>,
    pub only_active: bool,
    // 仅保留最后一天不早于该日期的活动
    pub ends_on_or_after: Option<NaiveDate>,
    pub trashed: Option<TrashedFilter>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(skip)]
    #[ts(skip)]
    pub created_by: Option<i64>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub location: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[ts(optional)]
    pub end_time: Option<Option<String>>,
    pub category: Option<EventCategory>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

fn default_true() -> bool {
    true
}

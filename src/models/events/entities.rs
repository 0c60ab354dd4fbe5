use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    /// 活动类别
    #[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
    pub enum EventCategory {
        Academic => "academic",
        Sports => "sports",
        Cultural => "cultural",
        Holiday => "holiday",
        Meeting => "meeting",
        Other => "other",
    }
}

impl Default for EventCategory {
    fn default() -> Self {
        Self::Other
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    // 为空表示单日活动
    pub end_date: Option<NaiveDate>,
    // HH:MM
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: EventCategory,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Event {
    /// 活动最后一天（单日活动即开始日期）
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// 是否与 [range_start, range_end] 区间有交集
    pub fn overlaps(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        self.start_date <= range_end && self.end_date.is_none_or(|end| end >= range_start)
    }
}

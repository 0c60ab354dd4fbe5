use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use super::entities::Event;

// 日历月视图响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub events: Vec<Event>,
}

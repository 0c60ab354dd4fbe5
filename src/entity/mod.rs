//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod announcements;
pub mod contact_infos;
pub mod enrollment_categories;
pub mod enrollment_processes;
pub mod enrollment_requirements;
pub mod events;
pub mod gallery_comments;
pub mod gallery_images;
pub mod notifications;
pub mod page_contents;
pub mod principal_awards;
pub mod principal_profiles;
pub mod site_themes;
pub mod special_programs;
pub mod staff_profiles;
pub mod users;

use chrono::{DateTime, NaiveDate, Utc};

// 时间戳列（秒）转 UTC 时间
pub(crate) fn timestamp_to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

// YYYY-MM-DD 文本列转日期
pub(crate) fn text_to_date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or_default()
}

pub(crate) fn date_to_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// JSON 数组文本列，损坏时视为空
pub(crate) fn text_to_list(text: &str) -> Vec<String> {
    serde_json::from_str(text).unwrap_or_default()
}

pub(crate) fn list_to_text(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_text_round_trip_keeps_lexical_order() {
        let a = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert!(date_to_text(a) < date_to_text(b));
        assert_eq!(text_to_date(&date_to_text(b)), b);
    }

    #[test]
    fn test_list_text_tolerates_garbage() {
        assert_eq!(text_to_list("not json"), Vec::<String>::new());
        let list = vec!["Math".to_string(), "Science".to_string()];
        assert_eq!(text_to_list(&list_to_text(&list)), list);
    }
}

pub mod calendar;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use crate::models::events::requests::{
    AdminEventQueryParams, CalendarQuery, CreateEventRequest, EventQueryParams,
    UpdateEventRequest,
};
use crate::utils::validate::{validate_text_length, validate_time_of_day};

super::lazy_service!(EventService);

impl EventService {
    pub async fn list_public(
        &self,
        query: EventQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_public(self, query, request).await
    }

    pub async fn get_public(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_event(self, id, true, request).await
    }

    // 日历月视图
    pub async fn calendar(
        &self,
        query: CalendarQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        calendar::month_view(self, query, request).await
    }

    pub async fn list_admin(
        &self,
        query: AdminEventQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_admin(self, query, request).await
    }

    pub async fn get_admin(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_event(self, id, false, request).await
    }

    pub async fn create(
        &self,
        body: CreateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, body, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        body: UpdateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_event(self, id, body, request).await
    }

    pub async fn soft_delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::soft_delete(self, id, request).await
    }

    pub async fn restore(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::restore(self, id, request).await
    }
}

/// 活动字段校验（更新时传入合并后的值）
pub(crate) fn validate_event(
    title: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> Result<(), &'static str> {
    validate_text_length(title, 1, 255, "Title must be between 1 and 255 characters")?;
    if end_date.is_some_and(|end| end < start_date) {
        return Err("end_date must not be earlier than start_date");
    }
    if let Some(time) = start_time {
        validate_time_of_day(time)?;
    }
    if let Some(time) = end_time {
        validate_time_of_day(time)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_event() {
        let start = date(2025, 3, 10);
        assert!(validate_event("Science fair", start, None, None, None).is_ok());
        assert!(validate_event("Science fair", start, Some(start), Some("08:30"), Some("17:00")).is_ok());
        assert!(validate_event("", start, None, None, None).is_err());
        assert!(validate_event("Science fair", start, Some(date(2025, 3, 9)), None, None).is_err());
        assert!(validate_event("Science fair", start, None, Some("8:30"), None).is_err());
        assert!(validate_event("Science fair", start, None, None, Some("24:00")).is_err());
    }
}

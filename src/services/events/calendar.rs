use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Datelike, Months, NaiveDate, Utc};

use super::EventService;
use crate::models::ApiResponse;
use crate::models::events::{requests::CalendarQuery, responses::CalendarResponse};

/// 月份首日与末日；年份 1900..=9999、月份 1..=12 之外返回 None
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    if !(1900..=9999).contains(&year) || !(1..=12).contains(&month) {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

pub async fn month_view(
    service: &EventService,
    query: CalendarQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let Some((month_start, month_end)) = month_bounds(year, month) else {
        return Ok(ApiResponse::validation(
            "year must be between 1900 and 9999 and month between 1 and 12",
        ));
    };

    let storage = service.get_storage(request)?;

    match storage.list_events_overlapping(month_start, month_end).await {
        Ok(events) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CalendarResponse {
                year,
                month,
                month_start,
                month_end,
                events,
            },
            "Calendar retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve calendar")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds_every_month() {
        let expected_last = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, last) in expected_last.iter().enumerate() {
            let month = i as u32 + 1;
            let (first, end) = month_bounds(2025, month).unwrap();
            assert_eq!(first, date(2025, month, 1));
            assert_eq!(end, date(2025, month, *last));
        }
    }

    #[test]
    fn test_month_bounds_leap_february() {
        assert_eq!(month_bounds(2024, 2).unwrap().1, date(2024, 2, 29));
        assert_eq!(month_bounds(2000, 2).unwrap().1, date(2000, 2, 29));
        assert_eq!(month_bounds(1900, 2).unwrap().1, date(1900, 2, 28));
    }

    #[test]
    fn test_month_bounds_rejects_out_of_range() {
        assert!(month_bounds(2025, 0).is_none());
        assert!(month_bounds(2025, 13).is_none());
        assert!(month_bounds(1899, 5).is_none());
        assert!(month_bounds(10000, 5).is_none());
        assert_eq!(month_bounds(9999, 12).unwrap().1, date(9999, 12, 31));
    }

    #[actix_web::test]
    async fn test_month_view_invalid_month_is_unprocessable() {
        use crate::storage::sea_orm_storage::memory_storage;
        use actix_web::http::StatusCode;
        use actix_web::test::TestRequest;
        use std::sync::Arc;

        let service = EventService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();
        let resp = month_view(
            &service,
            CalendarQuery {
                year: Some(2025),
                month: Some(13),
            },
            &req,
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = month_view(
            &service,
            CalendarQuery {
                year: Some(2025),
                month: Some(2),
            },
            &req,
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

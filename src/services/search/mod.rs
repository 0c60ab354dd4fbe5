pub mod ranking;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::search::{SearchQuery, SearchResponse};
use crate::models::{ApiResponse, ErrorCode};

super::lazy_service!(SearchService);

impl SearchService {
    pub async fn search(
        &self,
        query: SearchQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let config = &AppConfig::get().search;
        let term = query.q.trim().to_string();

        if term.chars().count() < config.min_query_length {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_detail(
                ErrorCode::SearchQueryTooShort,
                "Search query too short",
                format!(
                    "Search query must be at least {} characters",
                    config.min_query_length
                ),
            )));
        }

        let limit = ranking::effective_limit(query.limit, config.default_limit, config.max_limit);
        let storage = self.get_storage(request)?;

        let candidates = match storage.search_candidates(&term).await {
            Ok(candidates) => candidates,
            Err(e) => return Ok(ApiResponse::from_error(&e, "Search failed")),
        };

        let results = ranking::rank(candidates, &term, limit);
        tracing::debug!("Search '{}' returned {} results", term, results.len());

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            SearchResponse {
                query: term,
                total: results.len(),
                results,
            },
            "Search completed",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::announcements::requests::CreateAnnouncementRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_short_query_rejected() {
        let service = SearchService::with_storage(Arc::new(memory_storage().await));
        let req = TestRequest::default().to_http_request();

        let query = SearchQuery {
            q: "  a  ".to_string(),
            limit: None,
        };
        let resp = service.search(query, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_search_ranks_announcements() {
        let storage = Arc::new(memory_storage().await);
        for title in ["Science Fair", "Fair results", "Library hours"] {
            storage
                .create_announcement(CreateAnnouncementRequest {
                    title: title.to_string(),
                    content: "Details for families".to_string(),
                    announcement_type: Default::default(),
                    is_active: true,
                    is_pinned: false,
                    published_at: None,
                    expires_at: None,
                    image_path: None,
                    author_id: None,
                })
                .await
                .unwrap();
        }

        let service = SearchService::with_storage(storage);
        let req = TestRequest::default().to_http_request();
        let query = SearchQuery {
            q: " fair ".to_string(),
            limit: None,
        };
        let resp = service.search(query, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["query"], "fair");
        assert_eq!(json["data"]["total"], 2);
        let results = json["data"]["results"].as_array().unwrap();
        assert_eq!(results[0]["title"], "Fair results");
        assert_eq!(results[0]["score"], 15);
        assert_eq!(results[1]["score"], 10);
        assert!(results[0]["url"].as_str().unwrap().starts_with("/announcements/"));
    }

    #[actix_web::test]
    async fn test_exact_match_outranks_pinned_substring_match() {
        let storage = Arc::new(memory_storage().await);
        for (title, is_pinned) in [("Spring fair notes", true), ("Fair", false)] {
            storage
                .create_announcement(CreateAnnouncementRequest {
                    title: title.to_string(),
                    content: "Details for families".to_string(),
                    announcement_type: Default::default(),
                    is_active: true,
                    is_pinned,
                    published_at: None,
                    expires_at: None,
                    image_path: None,
                    author_id: None,
                })
                .await
                .unwrap();
        }

        let service = SearchService::with_storage(storage);
        let req = TestRequest::default().to_http_request();

        for q in ["fair", "FAIR"] {
            let query = SearchQuery {
                q: q.to_string(),
                limit: Some(1),
            };
            let resp = service.search(query, &req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);

            let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            let results = json["data"]["results"].as_array().unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0]["title"], "Fair");
            assert_eq!(results[0]["score"], 20);
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::EnrollmentService;
use crate::models::ApiResponse;
use crate::models::enrollment::{
    entities::{EnrollmentCategory, EnrollmentRequirement},
    responses::{CategoryWithRequirements, EnrollmentGuidelines},
};

/// 把要求按类别归组，保持类别与要求各自的原有顺序
pub(crate) fn group_requirements(
    categories: Vec<EnrollmentCategory>,
    requirements: Vec<EnrollmentRequirement>,
) -> Vec<CategoryWithRequirements> {
    let mut by_category: HashMap<i64, Vec<EnrollmentRequirement>> = HashMap::new();
    for requirement in requirements {
        by_category
            .entry(requirement.category_id)
            .or_default()
            .push(requirement);
    }

    categories
        .into_iter()
        .map(|category| {
            let requirements = by_category.remove(&category.id).unwrap_or_default();
            CategoryWithRequirements {
                category,
                requirements,
            }
        })
        .collect()
}

pub async fn get_guidelines(
    service: &EnrollmentService,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let categories = match storage.list_enrollment_categories(only_active).await {
        Ok(categories) => categories,
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to retrieve enrollment guidelines")),
    };
    let requirements = match storage.list_enrollment_requirements().await {
        Ok(requirements) => requirements,
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to retrieve enrollment guidelines")),
    };
    let processes = match storage.list_enrollment_processes(only_active).await {
        Ok(processes) => processes,
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to retrieve enrollment guidelines")),
    };

    let guidelines = EnrollmentGuidelines {
        categories: group_requirements(categories, requirements),
        processes,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        guidelines,
        "Enrollment guidelines retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollment::requests::{
        CreateCategoryRequest, CreateProcessRequest, CreateRequirementRequest,
    };
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::memory_storage;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    fn category(id: i64, name: &str) -> EnrollmentCategory {
        EnrollmentCategory {
            id,
            name: name.to_string(),
            description: None,
            is_active: true,
            sort_order: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn requirement(id: i64, category_id: i64) -> EnrollmentRequirement {
        EnrollmentRequirement {
            id,
            category_id,
            title: format!("req {id}"),
            description: None,
            is_required: true,
            sort_order: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_group_requirements() {
        let grouped = group_requirements(
            vec![category(1, "Grade 1"), category(2, "Transfer")],
            vec![requirement(10, 2), requirement(11, 1), requirement(12, 2), requirement(13, 9)],
        );
        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped[0].requirements.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![11]
        );
        assert_eq!(
            grouped[1].requirements.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
    }

    #[actix_web::test]
    async fn test_public_guidelines_hide_inactive() {
        let storage = Arc::new(memory_storage().await);
        let visible = storage
            .create_enrollment_category(CreateCategoryRequest {
                name: "Grade 1".to_string(),
                description: None,
                is_active: true,
                sort_order: 0,
            })
            .await
            .unwrap();
        let hidden = storage
            .create_enrollment_category(CreateCategoryRequest {
                name: "Closed".to_string(),
                description: None,
                is_active: false,
                sort_order: 1,
            })
            .await
            .unwrap();
        for category_id in [visible.id, hidden.id] {
            storage
                .create_enrollment_requirement(CreateRequirementRequest {
                    category_id,
                    title: "Birth certificate".to_string(),
                    description: None,
                    is_required: true,
                    sort_order: 0,
                })
                .await
                .unwrap();
        }
        storage
            .create_enrollment_process(CreateProcessRequest {
                step_number: 1,
                title: "Submit documents".to_string(),
                description: None,
                is_active: true,
            })
            .await
            .unwrap();

        let service = EnrollmentService::with_storage(storage);
        let req = TestRequest::default().to_http_request();
        let resp = service.guidelines(true, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let categories = json["data"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["name"], "Grade 1");
        assert_eq!(categories[0]["requirements"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"]["processes"].as_array().unwrap().len(), 1);
    }
}

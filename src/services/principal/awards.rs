use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PrincipalService, validate_award};
use crate::models::principal::requests::{CreateAwardRequest, UpdateAwardRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_award(
    service: &PrincipalService,
    mut body: CreateAwardRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.title = body.title.trim().to_string();
    if let Err(msg) = validate_award(&body.title, body.year) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    // 荣誉挂在唯一的校长信息下，停用状态也允许添加
    let principal = match storage.get_principal(false).await {
        Ok(Some(principal)) => principal,
        Ok(None) => {
            return Ok(ApiResponse::not_found(
                ErrorCode::PrincipalNotFound,
                "Principal profile",
            ));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to create award")),
    };

    match storage.create_principal_award(principal.id, body).await {
        Ok(award) => Ok(HttpResponse::Created().json(ApiResponse::success(award, "Award created"))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create award")),
    }
}

pub async fn update_award(
    service: &PrincipalService,
    id: i64,
    mut body: UpdateAwardRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = body.title.as_mut() {
        *title = title.trim().to_string();
        if title.is_empty() || title.chars().count() > 255 {
            return Ok(ApiResponse::validation(
                "Award title must be between 1 and 255 characters",
            ));
        }
    }
    if let Some(year) = body.year
        && let Err(msg) = crate::utils::validate::validate_year(year)
    {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.update_principal_award(id, body).await {
        Ok(Some(award)) => Ok(HttpResponse::Ok().json(ApiResponse::success(award, "Award updated"))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::AwardNotFound, "Award")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update award")),
    }
}

pub async fn delete_award(
    service: &PrincipalService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_principal_award(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Award deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::AwardNotFound, "Award")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete award")),
    }
}

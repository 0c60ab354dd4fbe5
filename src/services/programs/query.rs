use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgramService;
use crate::models::programs::requests::{ProgramListQuery, ProgramQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_programs(
    service: &ProgramService,
    query: ProgramQueryParams,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = ProgramListQuery {
        page,
        size,
        category: query.category,
        search: query.search,
        only_active,
    };

    match storage.list_programs_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Programs retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve programs")),
    }
}

pub async fn get_program(
    service: &ProgramService,
    id: i64,
    only_active: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_program_by_id(id, only_active).await {
        Ok(Some(program)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            program,
            "Program retrieved successfully",
        ))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::ProgramNotFound, "Program")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve program")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ThemeService, validate_theme};
use crate::models::themes::requests::{CreateThemeRequest, UpdateThemeRequest};
use crate::models::{ApiResponse, ErrorCode};

fn theme_exists() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_detail(
        ErrorCode::ThemeAlreadyExists,
        "Theme already exists",
        "A theme with this name already exists",
    ))
}

pub async fn create_theme(
    service: &ThemeService,
    mut body: CreateThemeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    body.name = body.name.trim().to_string();
    if let Err(msg) = validate_theme(
        &body.name,
        [&body.primary_color, &body.secondary_color, &body.accent_color],
    ) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    match storage.get_theme_by_name(&body.name).await {
        Ok(Some(_)) => return Ok(theme_exists()),
        Ok(None) => {}
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to create theme")),
    }

    match storage.create_theme(body).await {
        Ok(theme) => Ok(HttpResponse::Created().json(ApiResponse::success(theme, "Theme created"))),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to create theme")),
    }
}

pub async fn update_theme(
    service: &ThemeService,
    id: i64,
    mut body: UpdateThemeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = match storage.get_theme_by_id(id).await {
        Ok(Some(theme)) => theme,
        Ok(None) => return Ok(ApiResponse::not_found(ErrorCode::ThemeNotFound, "Theme")),
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update theme")),
    };

    if let Some(name) = body.name.as_mut() {
        *name = name.trim().to_string();
    }

    if let Err(msg) = validate_theme(
        body.name.as_deref().unwrap_or(&existing.name),
        [
            body.primary_color.as_deref().unwrap_or(&existing.primary_color),
            body.secondary_color.as_deref().unwrap_or(&existing.secondary_color),
            body.accent_color.as_deref().unwrap_or(&existing.accent_color),
        ],
    ) {
        return Ok(ApiResponse::validation(msg));
    }

    if let Some(name) = body.name.as_deref()
        && name != existing.name
    {
        match storage.get_theme_by_name(name).await {
            Ok(Some(_)) => return Ok(theme_exists()),
            Ok(None) => {}
            Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to update theme")),
        }
    }

    match storage.update_theme(id, body).await {
        Ok(Some(theme)) => Ok(HttpResponse::Ok().json(ApiResponse::success(theme, "Theme updated"))),
        Ok(None) => Ok(ApiResponse::not_found(ErrorCode::ThemeNotFound, "Theme")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to update theme")),
    }
}

pub async fn delete_theme(
    service: &ThemeService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_theme_by_id(id).await {
        Ok(Some(theme)) if theme.is_active => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_detail(
                ErrorCode::ThemeInUse,
                "Theme is in use",
                "The active theme cannot be deleted",
            )));
        }
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ApiResponse::not_found(ErrorCode::ThemeNotFound, "Theme")),
        Err(e) => return Ok(ApiResponse::from_error(&e, "Failed to delete theme")),
    }

    match storage.delete_theme(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Theme deleted"))),
        Ok(false) => Ok(ApiResponse::not_found(ErrorCode::ThemeNotFound, "Theme")),
        Err(e) => Ok(ApiResponse::from_error(&e, "Failed to delete theme")),
    }
}

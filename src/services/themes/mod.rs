pub mod activate;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::themes::{
    entities::SiteTheme,
    requests::{CreateThemeRequest, UpdateThemeRequest},
};
use crate::utils::validate::{validate_hex_color, validate_text_length};

super::lazy_service!(ThemeService);

impl ThemeService {
    /// 当前启用主题；没有时返回内置默认主题
    pub async fn active(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;

        match storage.get_active_theme().await {
            Ok(theme) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                theme.unwrap_or_else(SiteTheme::builtin_default),
                "Theme retrieved successfully",
            ))),
            Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve theme")),
        }
    }

    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;

        match storage.list_themes().await {
            Ok(themes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                themes,
                "Themes retrieved successfully",
            ))),
            Err(e) => Ok(ApiResponse::from_error(&e, "Failed to retrieve themes")),
        }
    }

    pub async fn create(
        &self,
        body: CreateThemeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_theme(self, body, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        body: UpdateThemeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_theme(self, id, body, request).await
    }

    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::delete_theme(self, id, request).await
    }

    pub async fn activate(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        activate::activate_theme(self, id, request).await
    }
}

pub(crate) fn validate_theme(
    name: &str,
    colors: [&str; 3],
) -> Result<(), &'static str> {
    validate_text_length(name, 1, 100, "Theme name must be between 1 and 100 characters")?;
    for color in colors {
        validate_hex_color(color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_theme() {
        assert!(validate_theme("Ocean", ["#003366", "#fff", "#00AAFF"]).is_ok());
        assert!(validate_theme("Ocean", ["#003366", "white", "#00AAFF"]).is_err());
        assert!(validate_theme("", ["#003366", "#fff", "#00AAFF"]).is_err());
    }
}

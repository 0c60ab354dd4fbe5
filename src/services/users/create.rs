use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

/// 校验新账号字段，返回首个错误
pub(crate) fn validate_new_user(user: &CreateUserRequest) -> Result<(), String> {
    validate_username(&user.username)?;
    validate_email(&user.email)?;
    validate_password_simple(&user.password)?;
    Ok(())
}

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    user_data.username = user_data.username.trim().to_string();
    user_data.email = user_data.email.trim().to_string();

    if let Err(msg) = validate_new_user(&user_data) {
        return Ok(ApiResponse::validation(msg));
    }

    let storage = service.get_storage(request)?;

    // 用户名与邮箱均需唯一
    for identifier in [&user_data.username, &user_data.email] {
        match storage.get_user_by_username_or_email(identifier).await {
            Ok(Some(_)) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_detail(
                    ErrorCode::UserAlreadyExists,
                    "User creation failed",
                    "Username or email already exists",
                )));
            }
            Ok(None) => {}
            Err(e) => return Ok(ApiResponse::from_error(&e, "User creation failed")),
        }
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(ApiResponse::from_error(&e, "User creation failed")),
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            tracing::info!("Admin account {} created", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created")))
        }
        Err(e) => Ok(ApiResponse::from_error(&e, "User creation failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn request(username: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: UserRole::Editor,
            display_name: None,
        }
    }

    #[test]
    fn test_validate_new_user() {
        assert!(validate_new_user(&request("editor_1", "e@school.test", "Secret123")).is_ok());
        assert!(validate_new_user(&request("ab", "e@school.test", "Secret123")).is_err());
        assert!(validate_new_user(&request("editor 1", "e@school.test", "Secret123")).is_err());
        assert!(validate_new_user(&request("editor", "not-an-email", "Secret123")).is_err());
        assert!(validate_new_user(&request("editor", "e@school.test", "short")).is_err());
    }
}

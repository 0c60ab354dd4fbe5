use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::UserStatus;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_detail(
        ErrorCode::AuthFailed,
        "Login failed",
        "Username or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 根据用户名或邮箱获取账号
    let user = match storage
        .get_user_by_username_or_email(login_request.username.trim())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(invalid_credentials()),
        Err(e) => return Ok(ApiResponse::from_error(&e, "Login failed")),
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        tracing::info!("Failed login attempt for {}", user.username);
        return Ok(invalid_credentials());
    }

    // 3. 停用账号不允许登录
    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_detail(
            ErrorCode::UserInactive,
            "Login failed",
            "Account is inactive",
        )));
    }

    // 4. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        tracing::warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 5. 生成令牌对
    let token_pair = match user.generate_token_pair() {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_detail(
                    ErrorCode::InternalServerError,
                    "Login failed",
                    "Unable to generate token",
                )),
            );
        }
    };

    tracing::info!("User {} logged in successfully", user.username);

    let refresh_cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: JwtUtils::access_token_ttl(),
        user,
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::memory_storage;
    use crate::utils::password::hash_password;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    async fn service_with_user(active: bool) -> AuthService {
        let storage = memory_storage().await;
        let user = storage
            .create_user(CreateUserRequest {
                username: "editor".into(),
                email: "editor@school.test".into(),
                password: hash_password("Secret123").unwrap(),
                role: UserRole::Editor,
                display_name: None,
            })
            .await
            .unwrap();
        if !active {
            storage.set_user_status_for_test(user.id, false).await;
        }
        AuthService::with_storage(Arc::new(storage))
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[actix_web::test]
    async fn test_login_success_sets_cookie() {
        let service = service_with_user(true).await;
        let req = TestRequest::default().to_http_request();
        let resp = handle_login(&service, login("editor@school.test", "Secret123"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.cookies()
                .any(|c| c.name() == crate::utils::jwt::REFRESH_COOKIE_NAME)
        );
    }

    #[actix_web::test]
    async fn test_login_wrong_password_or_inactive() {
        let service = service_with_user(true).await;
        let req = TestRequest::default().to_http_request();
        let resp = handle_login(&service, login("editor", "wrong"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = handle_login(&service, login("nobody", "Secret123"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let service = service_with_user(false).await;
        let resp = handle_login(&service, login("editor", "Secret123"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::UserStatus,
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;
use crate::utils::validate::Validate;

use super::AuthService;
use crate::services::{storage_error, validation_error};

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Email or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = login_request.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;
    let config = service.get_config();
    let email = login_request.email.trim().to_lowercase();

    // 1. 查找用户并校验密码
    let user = match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(invalid_credentials()),
        Err(e) => return Ok(storage_error(ErrorCode::InternalServerError, "Login failed", e)),
    };
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(invalid_credentials());
    }
    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Account is disabled",
        )));
    }

    // 2. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        tracing::warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 3. 生成令牌对
    let refresh_days = if login_request.remember_me {
        config.jwt.refresh_token_remember_me_expiry
    } else {
        config.jwt.refresh_token_expiry
    };
    let token_pair = match JwtUtils::generate_token_pair(
        user.subject(),
        Some(chrono::Duration::days(refresh_days)),
    ) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    tracing::info!("User {} logged in", user.id);
    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_days);
    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60,
        user,
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}

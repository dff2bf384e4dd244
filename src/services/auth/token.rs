use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::responses::{RefreshTokenResponse, UserInfoResponse};
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;
use crate::services::{current_user, storage_error};

fn login_expired() -> HttpResponse {
    // 清除无效的 refresh token cookie
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_refresh_token_cookie("", 0))
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Login expired or invalid, please login again",
        ))
}

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            return Ok(login_expired());
        }
    };
    let Some(user_id) = claims.user_id() else {
        return Ok(login_expired());
    };

    // 以当前用户状态签发，角色或企业变更立即生效
    let storage = service.get_storage(request)?;
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status == UserStatus::Active => user,
        Ok(_) => return Ok(login_expired()),
        Err(e) => {
            return Ok(storage_error(
                ErrorCode::InternalServerError,
                "Token refresh failed",
                e,
            ));
        }
    };

    match JwtUtils::generate_access_token(user.subject()) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: service.get_config().jwt.access_token_expiry * 60,
            },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Token refresh failed",
                )),
            )
        }
    }
}

pub async fn handle_get_user(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let company = match user.company_id {
        Some(company_id) => {
            let storage = service.get_storage(request)?;
            match storage.get_company_by_id(company_id).await {
                Ok(company) => company,
                Err(e) => {
                    return Ok(storage_error(
                        ErrorCode::InternalServerError,
                        "Failed to load company",
                        e,
                    ));
                }
            }
        }
        None => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UserInfoResponse { user, company },
        "User information retrieved successfully",
    )))
}

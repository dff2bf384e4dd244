use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        RegisterRequest,
        requests::AccountType,
        responses::RegisterResponse,
    },
    users::{
        entities::{UserRole, UserType},
        requests::CreateUserRequest,
    },
};
use crate::errors::ArgoChainError;
use crate::utils::password::hash_password;
use crate::utils::validate::Validate;

use super::AuthService;
use crate::services::{storage_error, validation_error};

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = register_request.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;
    let email = register_request.email.trim().to_lowercase();

    // 1. 邮箱唯一
    match storage.get_user_by_email(&email).await {
        Ok(Some(_)) => return Ok(email_taken()),
        Ok(None) => {}
        Err(e) => return Ok(register_failed(e)),
    }

    // 2. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(register_failed(e)),
    };

    let mut user = CreateUserRequest {
        email,
        password_hash,
        name: register_request.name.trim().to_string(),
        role: UserRole::Member,
        user_type: UserType::IndividualBuyer,
        company_id: None,
        phone: register_request.phone,
        email_verified: false,
    };

    // 3. 企业账户同时创建待审核企业
    let result = match (register_request.account_type, register_request.company) {
        (AccountType::Company, Some(company)) => {
            user.role = UserRole::Owner;
            user.user_type = UserType::CompanyMember;
            storage
                .register_company_owner(company, user)
                .await
                .map(|(company, user)| RegisterResponse {
                    user,
                    company: Some(company),
                })
        }
        _ => storage
            .create_user(user)
            .await
            .map(|user| RegisterResponse {
                user,
                company: None,
            }),
    };

    match result {
        Ok(response) => {
            tracing::info!(
                "Registered user {} (company: {:?})",
                response.user.id,
                response.company.as_ref().map(|c| c.id)
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "注册成功")))
        }
        Err(e) => Ok(register_failed(e)),
    }
}

fn email_taken() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::UserAlreadyExists,
        "Email already registered",
    ))
}

// 并发注册时由唯一索引兜底
fn register_failed(err: ArgoChainError) -> HttpResponse {
    match err {
        ArgoChainError::Conflict(detail) => {
            tracing::warn!("Register lost unique race: {}", detail);
            email_taken()
        }
        other => storage_error(ErrorCode::RegisterFailed, "Register failed", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_unique_conflict_maps_to_409() {
        let resp = register_failed(ArgoChainError::conflict("users.email"));
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = register_failed(ArgoChainError::database_operation("disk full"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! 企业访问控制错误
//!
//! 由企业关联关系、企业状态和企业类型决定，在请求开始时根据已加载的用户和企业判定一次。

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::models::companies::entities::{Company, CompanyType};
use crate::models::users::entities::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorCode {
    CompanyNotAssociated,
    CompanyNotActive,
    InsufficientPermissions,
    SubscriptionRequired,
    InvalidCompanyType,
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorCode::CompanyNotAssociated => "COMPANY_NOT_ASSOCIATED",
            AuthErrorCode::CompanyNotActive => "COMPANY_NOT_ACTIVE",
            AuthErrorCode::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            AuthErrorCode::SubscriptionRequired => "SUBSCRIPTION_REQUIRED",
            AuthErrorCode::InvalidCompanyType => "INVALID_COMPANY_TYPE",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AuthErrorCode::CompanyNotAssociated => "User is not associated with any company",
            AuthErrorCode::CompanyNotActive => "Company account is not active",
            AuthErrorCode::InsufficientPermissions => {
                "Insufficient permissions to perform this action"
            }
            AuthErrorCode::SubscriptionRequired => {
                "An active subscription is required to access this feature"
            }
            AuthErrorCode::InvalidCompanyType => {
                "Company type is not allowed to access this resource"
            }
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 403 响应体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAccessErrorBody {
    pub status_code: u16,
    pub code: AuthErrorCode,
    pub message: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyAccessError(pub AuthErrorCode);

impl CompanyAccessError {
    pub fn code(&self) -> AuthErrorCode {
        self.0
    }

    pub fn body(&self) -> CompanyAccessErrorBody {
        CompanyAccessErrorBody {
            status_code: StatusCode::FORBIDDEN.as_u16(),
            code: self.0,
            message: self.0.message(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl From<AuthErrorCode> for CompanyAccessError {
    fn from(code: AuthErrorCode) -> Self {
        Self(code)
    }
}

impl fmt::Display for CompanyAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.0.message())
    }
}

impl std::error::Error for CompanyAccessError {}

impl ResponseError for CompanyAccessError {
    fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// 判定用户能否以企业身份访问
///
/// 顺序：未关联企业 → 企业未激活 → 企业类型不符。`allowed_types` 为空表示不限类型。
pub fn check_company_access(
    user: &User,
    company: Option<&Company>,
    allowed_types: &[CompanyType],
) -> Result<(), AuthErrorCode> {
    let company = match (user.company_id, company) {
        (Some(id), Some(company)) if company.id == id => company,
        _ => return Err(AuthErrorCode::CompanyNotAssociated),
    };
    if !company.is_active() {
        return Err(AuthErrorCode::CompanyNotActive);
    }
    if !allowed_types.is_empty() && !allowed_types.contains(&company.company_type) {
        return Err(AuthErrorCode::InvalidCompanyType);
    }
    Ok(())
}

pub mod admin;
pub mod auth;
pub mod companies;
pub mod inquiries;
pub mod news;
pub mod price_trends;
pub mod products;
pub mod suppliers;

pub use admin::AdminService;
pub use auth::AuthService;
pub use companies::CompanyService;
pub use inquiries::InquiryService;
pub use news::NewsService;
pub use price_trends::PriceTrendService;
pub use products::ProductService;
pub use suppliers::SupplierService;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult, web};
use std::sync::Arc;

use crate::errors::ArgoChainError;
use crate::middlewares::{RequireCompany, RequireJWT};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{AuthErrorCode, CompanyAccessError},
    companies::entities::Company,
    users::entities::User,
};
use crate::storage::Storage;
use crate::utils::validate::ValidationErrors;

/// 从 app data 取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!("Storage not registered in app data");
            actix_web::error::ErrorInternalServerError("storage unavailable")
        })
}

/// 400，data 为逐字段违规
pub(crate) fn validation_error(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors))
}

/// 500，详细错误只写日志
pub(crate) fn storage_error(code: ErrorCode, context: &str, err: ArgoChainError) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(code, context))
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 企业权限拒绝（403，独立的响应体格式）
pub(crate) fn access_denied(code: AuthErrorCode) -> HttpResponse {
    CompanyAccessError(code).error_response()
}

pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

/// RequireCompany 放入扩展的企业，缺失视为未关联企业
pub(crate) fn current_company(request: &HttpRequest) -> Result<Company, HttpResponse> {
    RequireCompany::extract_company(request)
        .ok_or_else(|| access_denied(AuthErrorCode::CompanyNotAssociated))
}

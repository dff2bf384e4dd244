use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::AuthErrorCode,
    companies::{requests::UpdateCompanyRequest, responses::CompanyResponse},
};
use crate::storage::Storage;
use crate::utils::validate::Validate;

use super::{
    access_denied, current_company, current_user, not_found, storage_error,
    storage_from_request, validation_error,
};

pub struct CompanyService {
    storage: Option<Arc<dyn Storage>>,
}

impl CompanyService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 当前用户所属企业
    pub async fn get_my_company(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let company = match current_company(request) {
            Ok(company) => company,
            Err(response) => return Ok(response),
        };
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            CompanyResponse { company },
            "Company retrieved successfully",
        )))
    }

    // 更新企业资料，仅企业所有者
    pub async fn update_my_company(
        &self,
        update: UpdateCompanyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let (user, company) = match (current_user(request), current_company(request)) {
            (Ok(user), Ok(company)) => (user, company),
            (Err(response), _) | (_, Err(response)) => return Ok(response),
        };
        if !user.is_company_owner() {
            return Ok(access_denied(AuthErrorCode::InsufficientPermissions));
        }
        if let Err(errors) = update.validate() {
            return Ok(validation_error(errors));
        }

        let storage = self.get_storage(request)?;
        match storage.update_company_profile(company.id, update).await {
            Ok(Some(company)) => {
                tracing::info!("Company {} profile updated by user {}", company.id, user.id);
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    CompanyResponse { company },
                    "Company updated successfully",
                )))
            }
            Ok(None) => Ok(not_found(ErrorCode::CompanyNotFound, "Company not found")),
            Err(e) => Ok(storage_error(
                ErrorCode::CompanyUpdateFailed,
                "Failed to update company",
                e,
            )),
        }
    }
}

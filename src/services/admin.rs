use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    companies::requests::{AdminCompanyListQuery, CompanyListFilter, UpdateCompanyStatusRequest},
};
use crate::storage::Storage;
use crate::utils::validate::Validate;

use super::{current_user, not_found, storage_error, storage_from_request, validation_error};

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn list_companies(
        &self,
        query: AdminCompanyListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = query.validate() {
            return Ok(validation_error(errors));
        }
        let filter = CompanyListFilter {
            status: query.status,
            company_type: query.company_type,
            search: query.search,
        };

        let storage = self.get_storage(request)?;
        match storage.list_companies(filter, query.pagination).await {
            Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                page,
                "Companies retrieved successfully",
            ))),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to list companies",
                e,
            )),
        }
    }

    // 审核企业：pending -> active / rejected 等
    pub async fn update_company_status(
        &self,
        id: i64,
        update: UpdateCompanyStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let admin = match current_user(request) {
            Ok(user) => user,
            Err(response) => return Ok(response),
        };

        let storage = self.get_storage(request)?;
        match storage.update_company_status(id, update.status).await {
            Ok(true) => {
                tracing::info!(
                    "Company {} status set to {} by admin {}",
                    id,
                    update.status,
                    admin.id
                );
                match storage.get_company_by_id(id).await {
                    Ok(Some(company)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        company,
                        "Company status updated successfully",
                    ))),
                    Ok(None) => Ok(not_found(ErrorCode::CompanyNotFound, "Company not found")),
                    Err(e) => Ok(storage_error(
                        ErrorCode::InternalServerError,
                        "Failed to load company",
                        e,
                    )),
                }
            }
            Ok(false) => Ok(not_found(ErrorCode::CompanyNotFound, "Company not found")),
            Err(e) => Ok(storage_error(
                ErrorCode::CompanyUpdateFailed,
                "Failed to update company status",
                e,
            )),
        }
    }
}

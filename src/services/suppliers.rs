use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    common::{LanguageQuery, PaginatedResponse, multilingual::DEFAULT_LANG},
    companies::{
        entities::{Company, CompanyType},
        requests::SupplierLookupQuery,
        responses::SupplierSummary,
    },
};
use crate::storage::Storage;
use crate::utils::validate::Validate;

use super::{not_found, storage_error, storage_from_request, validation_error};

pub struct SupplierService {
    storage: Option<Arc<dyn Storage>>,
}

impl SupplierService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    async fn summarize(
        storage: &Arc<dyn Storage>,
        company: Company,
        lang: &str,
    ) -> crate::errors::Result<SupplierSummary> {
        let product_count = storage.count_listed_products(company.id).await?;
        Ok(SupplierSummary {
            id: company.id,
            display_name: company.name.resolve(lang).to_string(),
            name: company.name,
            company_type: company.company_type,
            profile: company.profile,
            product_count: product_count as i64,
        })
    }

    pub async fn list_suppliers(
        &self,
        query: SupplierLookupQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = query.validate() {
            return Ok(validation_error(errors));
        }

        let lang = query
            .lang
            .clone()
            .unwrap_or_else(|| DEFAULT_LANG.to_string());
        let storage = self.get_storage(request)?;
        let page = match storage.list_suppliers(query).await {
            Ok(page) => page,
            Err(e) => {
                return Ok(storage_error(
                    ErrorCode::InternalServerError,
                    "Failed to list suppliers",
                    e,
                ));
            }
        };

        let mut items = Vec::with_capacity(page.items.len());
        for company in page.items {
            match Self::summarize(&storage, company, &lang).await {
                Ok(summary) => items.push(summary),
                Err(e) => {
                    return Ok(storage_error(
                        ErrorCode::InternalServerError,
                        "Failed to list suppliers",
                        e,
                    ));
                }
            }
        }

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaginatedResponse {
                items,
                pagination: page.pagination,
            },
            "Suppliers retrieved successfully",
        )))
    }

    // 仅公开已激活的供应商
    pub async fn get_supplier(
        &self,
        id: i64,
        language: LanguageQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let company = match storage.get_company_by_id(id).await {
            Ok(Some(company))
                if company.is_active() && company.company_type == CompanyType::Supplier =>
            {
                company
            }
            Ok(_) => return Ok(not_found(ErrorCode::CompanyNotFound, "Supplier not found")),
            Err(e) => {
                return Ok(storage_error(
                    ErrorCode::InternalServerError,
                    "Failed to load supplier",
                    e,
                ));
            }
        };

        match Self::summarize(&storage, company, language.lang()).await {
            Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                summary,
                "Supplier retrieved successfully",
            ))),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to load supplier",
                e,
            )),
        }
    }
}

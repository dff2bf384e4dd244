use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::LanguageQuery;
use crate::models::companies::requests::SupplierLookupQuery;
use crate::services::SupplierService;
use crate::utils::SafeIDI64;

static SUPPLIER_SERVICE: Lazy<SupplierService> = Lazy::new(SupplierService::new_lazy);

pub async fn list_suppliers(
    req: HttpRequest,
    query: web::Query<SupplierLookupQuery>,
) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE
        .list_suppliers(query.into_inner(), &req)
        .await
}

pub async fn get_supplier(
    req: HttpRequest,
    id: SafeIDI64,
    query: web::Query<LanguageQuery>,
) -> ActixResult<HttpResponse> {
    SUPPLIER_SERVICE
        .get_supplier(id.0, query.into_inner(), &req)
        .await
}

// 公开接口，无需登录
pub fn configure_supplier_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/suppliers")
            .route("", web::get().to(list_suppliers))
            .route("/{id}", web::get().to(get_supplier)),
    );
}

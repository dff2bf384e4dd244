use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    products::{
        requests::{CreateProductRequest, ProductLookupQuery},
        responses::ProductResponse,
    },
};
use crate::storage::Storage;
use crate::utils::validate::Validate;

use super::{
    current_company, not_found, storage_error, storage_from_request, validation_error,
};

pub struct ProductService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProductService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn list_products(
        &self,
        query: ProductLookupQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = query.validate() {
            return Ok(validation_error(errors));
        }
        let storage = self.get_storage(request)?;
        match storage.list_products(query).await {
            Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                page,
                "Products retrieved successfully",
            ))),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to list products",
                e,
            )),
        }
    }

    // 下架产品对外视为不存在
    pub async fn get_product(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        match storage.get_product_by_id(id).await {
            Ok(Some(product)) if product.is_listed => Ok(HttpResponse::Ok().json(
                ApiResponse::success(ProductResponse { product }, "Product retrieved successfully"),
            )),
            Ok(_) => Ok(not_found(ErrorCode::ProductNotFound, "Product not found")),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to load product",
                e,
            )),
        }
    }

    pub async fn create_product(
        &self,
        product: CreateProductRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let supplier = match current_company(request) {
            Ok(company) => company,
            Err(response) => return Ok(response),
        };
        if let Err(errors) = product.validate() {
            return Ok(validation_error(errors));
        }

        let storage = self.get_storage(request)?;
        match storage.create_product(supplier.id, product).await {
            Ok(product) => {
                tracing::info!("Supplier {} created product {}", supplier.id, product.id);
                Ok(HttpResponse::Created().json(ApiResponse::success(
                    ProductResponse { product },
                    "Product created successfully",
                )))
            }
            Err(e) => Ok(storage_error(
                ErrorCode::ProductCreationFailed,
                "Failed to create product",
                e,
            )),
        }
    }
}

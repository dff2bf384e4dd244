use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    price_trends::requests::{CreatePriceTrendRequest, PriceTrendQuery},
};
use crate::storage::Storage;
use crate::utils::validate::Validate;

use super::{storage_error, storage_from_request, validation_error};

pub struct PriceTrendService {
    storage: Option<Arc<dyn Storage>>,
}

impl PriceTrendService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn list_price_trends(
        &self,
        query: PriceTrendQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = query.validate() {
            return Ok(validation_error(errors));
        }
        let storage = self.get_storage(request)?;
        match storage.list_price_trends(query).await {
            Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                page,
                "Price trends retrieved successfully",
            ))),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to list price trends",
                e,
            )),
        }
    }

    pub async fn create_price_trend(
        &self,
        trend: CreatePriceTrendRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = trend.validate() {
            return Ok(validation_error(errors));
        }
        let storage = self.get_storage(request)?;
        match storage.create_price_trend(trend).await {
            Ok(trend) => Ok(HttpResponse::Created().json(ApiResponse::success(
                trend,
                "Price trend recorded successfully",
            ))),
            Err(e) => Ok(storage_error(
                ErrorCode::PriceTrendCreationFailed,
                "Failed to record price trend",
                e,
            )),
        }
    }
}

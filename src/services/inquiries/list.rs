use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    inquiries::{requests::InquiryListQuery, responses::InquiryResponse},
};
use crate::utils::validate::Validate;

use super::InquiryService;
use crate::services::{current_company, storage_error, validation_error};

// 买方自己的询价
pub async fn list_inquiries(
    service: &InquiryService,
    query: InquiryListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let buyer = match current_company(request) {
        Ok(company) => company,
        Err(response) => return Ok(response),
    };
    if let Err(errors) = query.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;
    match storage.list_buyer_inquiries(buyer.id, query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Inquiries retrieved successfully",
        ))),
        Err(e) => Ok(storage_error(
            ErrorCode::InternalServerError,
            "Failed to list inquiries",
            e,
        )),
    }
}

pub async fn get_stats(service: &InquiryService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let buyer = match current_company(request) {
        Ok(company) => company,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request)?;
    match storage.buyer_inquiry_stats(buyer.id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Inquiry statistics retrieved successfully",
        ))),
        Err(e) => Ok(storage_error(
            ErrorCode::InternalServerError,
            "Failed to compute inquiry statistics",
            e,
        )),
    }
}

pub async fn get_inquiry(
    service: &InquiryService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let company = match current_company(request) {
        Ok(company) => company,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request)?;
    match InquiryService::load_for_participant(&storage, id, &company).await {
        Ok(inquiry) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            InquiryResponse { inquiry },
            "Inquiry retrieved successfully",
        ))),
        Err(response) => Ok(response),
    }
}

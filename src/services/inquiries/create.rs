use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    inquiries::{
        requests::{CreateInquiryRequest, NewInquiry},
        responses::InquiryResponse,
    },
};
use crate::utils::random_code::generate_inquiry_no;
use crate::utils::validate::Validate;

use super::InquiryService;
use crate::services::{current_company, not_found, storage_error, validation_error};

pub async fn create_inquiry(
    service: &InquiryService,
    inquiry: CreateInquiryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let buyer = match current_company(request) {
        Ok(company) => company,
        Err(response) => return Ok(response),
    };
    if let Err(errors) = inquiry.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;

    // 供应商取自产品，产品必须处于上架状态
    let product = match storage.get_product_by_id(inquiry.product_id).await {
        Ok(Some(product)) if product.is_listed => product,
        Ok(_) => return Ok(not_found(ErrorCode::ProductNotFound, "Product not found")),
        Err(e) => {
            return Ok(storage_error(
                ErrorCode::InquiryCreationFailed,
                "Failed to create inquiry",
                e,
            ));
        }
    };

    let new_inquiry = NewInquiry {
        inquiry_no: generate_inquiry_no(chrono::Utc::now()),
        buyer_id: buyer.id,
        supplier_id: product.supplier_id,
        product_id: product.id,
        details: inquiry.to_details(),
    };

    match storage.create_inquiry(new_inquiry).await {
        Ok(inquiry) => {
            tracing::info!(
                "Inquiry {} created by buyer {} for supplier {}",
                inquiry.inquiry_no,
                inquiry.buyer_id,
                inquiry.supplier_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                InquiryResponse { inquiry },
                "Inquiry created successfully",
            )))
        }
        Err(e) => Ok(storage_error(
            ErrorCode::InquiryCreationFailed,
            "Failed to create inquiry",
            e,
        )),
    }
}

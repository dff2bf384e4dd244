use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    inquiries::requests::{GetMessagesQuery, SendMessageRequest},
};
use crate::utils::validate::Validate;

use super::InquiryService;
use crate::services::{current_company, current_user, storage_error, validation_error};

pub async fn list_messages(
    service: &InquiryService,
    inquiry_id: i64,
    query: GetMessagesQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let company = match current_company(request) {
        Ok(company) => company,
        Err(response) => return Ok(response),
    };
    if let Err(errors) = query.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;
    if let Err(response) = InquiryService::load_for_participant(&storage, inquiry_id, &company).await
    {
        return Ok(response);
    }

    match storage.list_inquiry_messages(inquiry_id, query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Messages retrieved successfully",
        ))),
        Err(e) => Ok(storage_error(
            ErrorCode::InternalServerError,
            "Failed to list messages",
            e,
        )),
    }
}

pub async fn send_message(
    service: &InquiryService,
    inquiry_id: i64,
    message: SendMessageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (user, company) = match (current_user(request), current_company(request)) {
        (Ok(user), Ok(company)) => (user, company),
        (Err(response), _) | (_, Err(response)) => return Ok(response),
    };
    if let Err(errors) = message.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;
    if let Err(response) = InquiryService::load_for_participant(&storage, inquiry_id, &company).await
    {
        return Ok(response);
    }

    match storage
        .create_inquiry_message(inquiry_id, user.id, message.message.trim())
        .await
    {
        Ok(message) => {
            tracing::debug!("User {} posted message {} on inquiry {}", user.id, message.id, inquiry_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                message,
                "Message sent successfully",
            )))
        }
        Err(e) => Ok(storage_error(
            ErrorCode::MessageSendFailed,
            "Failed to send message",
            e,
        )),
    }
}

pub mod create;
pub mod list;
pub mod messages;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::inquiries::requests::{
    CreateInquiryRequest, GetMessagesQuery, InquiryListQuery, SendMessageRequest,
};
use crate::models::{ErrorCode, companies::entities::Company, inquiries::entities::Inquiry};
use crate::models::auth::AuthErrorCode;
use crate::storage::Storage;

use super::{access_denied, not_found, storage_error, storage_from_request};

pub struct InquiryService {
    storage: Option<Arc<dyn Storage>>,
}

impl InquiryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    /// 加载询价并确认企业为买方或卖方
    pub(crate) async fn load_for_participant(
        storage: &Arc<dyn Storage>,
        inquiry_id: i64,
        company: &Company,
    ) -> Result<Inquiry, HttpResponse> {
        match storage.get_inquiry_by_id(inquiry_id).await {
            Ok(Some(inquiry)) if inquiry.involves_company(company.id) => Ok(inquiry),
            Ok(Some(_)) => {
                tracing::info!(
                    "Company {} denied access to inquiry {}",
                    company.id,
                    inquiry_id
                );
                Err(access_denied(AuthErrorCode::InsufficientPermissions))
            }
            Ok(None) => Err(not_found(ErrorCode::InquiryNotFound, "Inquiry not found")),
            Err(e) => Err(storage_error(
                ErrorCode::InternalServerError,
                "Failed to load inquiry",
                e,
            )),
        }
    }

    pub async fn create_inquiry(
        &self,
        inquiry: CreateInquiryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_inquiry(self, inquiry, request).await
    }

    pub async fn list_inquiries(
        &self,
        query: InquiryListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_inquiries(self, query, request).await
    }

    pub async fn get_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_stats(self, request).await
    }

    pub async fn get_inquiry(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_inquiry(self, id, request).await
    }

    pub async fn list_messages(
        &self,
        id: i64,
        query: GetMessagesQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        messages::list_messages(self, id, query, request).await
    }

    pub async fn send_message(
        &self,
        id: i64,
        message: SendMessageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        messages::send_message(self, id, message, request).await
    }
}

use serde::Deserialize;

use super::entities::{InquiryDetails, InquiryStatus, SupplierPriority, INQUIRY_DETAILS_VERSION};
use crate::models::common::PaginationQuery;
use crate::models::common::deserialize::{string_to_bool, string_to_i64};
use crate::utils::validate::{Constraint, Validate, ValidationErrors};

pub const MAX_MESSAGE_CHARS: usize = 2000;

/// 创建询价
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    #[serde(deserialize_with = "string_to_i64")]
    pub product_id: i64,
    pub quantity: f64,
    pub unit: String,
    pub delivery_location: Option<String>,
    pub trade_terms: Option<String>,
    pub payment_method: Option<String>,
    pub buyer_remarks: Option<String>,
    #[serde(default)]
    pub supplier_priority: SupplierPriority,
}

impl Validate for CreateInquiryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.min("productId", self.product_id, 1);
        if !(self.quantity.is_finite() && self.quantity > 0.0) {
            errors.add("quantity", Constraint::Min, "> 0");
        }
        errors
            .required_text("unit", &self.unit)
            .max_chars("unit", &self.unit, 32);
        if let Some(remarks) = &self.buyer_remarks {
            errors.max_chars("buyerRemarks", remarks, MAX_MESSAGE_CHARS);
        }
        errors.into_result()
    }
}

impl CreateInquiryRequest {
    pub fn to_details(&self) -> InquiryDetails {
        InquiryDetails {
            version: INQUIRY_DETAILS_VERSION,
            quantity: self.quantity,
            unit: self.unit.trim().to_string(),
            delivery_location: self.delivery_location.clone(),
            trade_terms: self.trade_terms.clone(),
            payment_method: self.payment_method.clone(),
            buyer_remarks: self.buyer_remarks.clone(),
            supplier_priority: self.supplier_priority,
        }
    }
}

/// 存储层创建询价
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub inquiry_no: String,
    pub buyer_id: i64,
    pub supplier_id: i64,
    pub product_id: i64,
    pub details: InquiryDetails,
}

/// 买方询价列表查询
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryListQuery {
    pub status: Option<InquiryStatus>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl Validate for InquiryListQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.pagination.validate()
    }
}

fn default_desc() -> bool {
    true
}

/// 询价消息分页查询，`desc` 为 true 时最新的在前
#[derive(Debug, Clone, Deserialize)]
pub struct GetMessagesQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default = "default_desc", deserialize_with = "string_to_bool")]
    pub desc: bool,
}

impl Default for GetMessagesQuery {
    fn default() -> Self {
        Self {
            pagination: PaginationQuery::default(),
            desc: true,
        }
    }
}

impl Validate for GetMessagesQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.pagination.validate()
    }
}

/// 发送询价消息
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

impl Validate for SendMessageRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .required_text("message", &self.message)
            .max_chars("message", &self.message, MAX_MESSAGE_CHARS);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    fn message(text: String) -> SendMessageRequest {
        SendMessageRequest { message: text }
    }

    #[test]
    fn test_message_length_limits() {
        assert!(message("a".repeat(2000)).validate().is_ok());
        assert!(message("a".repeat(2001)).validate().is_err());
        assert!(message("询".repeat(2000)).validate().is_ok());
    }

    #[test]
    fn test_empty_message_rejected() {
        let errors = message(String::new()).validate().unwrap_err();
        assert_eq!(errors.violations()[0].constraint, Constraint::Required);
        assert!(message(" \n\t ".into()).validate().is_err());
    }

    #[test]
    fn test_messages_query_desc_default_true() {
        let query = web::Query::<GetMessagesQuery>::from_query("page=2")
            .unwrap()
            .into_inner();
        assert!(query.desc);
        assert_eq!(query.pagination.page, 2);
        assert_eq!(query.pagination.limit, 10);
    }

    #[test]
    fn test_messages_query_desc_from_string() {
        let query = web::Query::<GetMessagesQuery>::from_query("desc=false&limit=50")
            .unwrap()
            .into_inner();
        assert!(!query.desc);
        assert!(query.validate().is_ok());

        assert!(web::Query::<GetMessagesQuery>::from_query("desc=maybe").is_err());
    }

    #[test]
    fn test_messages_query_limit_rejected() {
        let query = web::Query::<GetMessagesQuery>::from_query("limit=51")
            .unwrap()
            .into_inner();
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_create_inquiry_validation() {
        let req: CreateInquiryRequest = serde_json::from_str(
            r#"{"productId":"3","quantity":0,"unit":""}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields: Vec<&str> = errors
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(fields, vec!["quantity", "unit"]);
        assert_eq!(req.supplier_priority, SupplierPriority::Normal);
    }

    #[test]
    fn test_status_filter_parsed() {
        let query = web::Query::<InquiryListQuery>::from_query("status=quoted")
            .unwrap()
            .into_inner();
        assert_eq!(query.status, Some(InquiryStatus::Quoted));
    }
}

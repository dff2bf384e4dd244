use serde::Deserialize;

use crate::models::common::PaginationQuery;
use crate::utils::validate::{Constraint, Validate, ValidationErrors};

/// 价格走势查询
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTrendQuery {
    pub product_name: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl Validate for PriceTrendQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.product_name {
            errors.max_chars("productName", name, 200);
        }
        if let Err(pagination) = self.pagination.validate() {
            errors.merge(pagination);
        }
        errors.into_result()
    }
}

fn default_exchange_rate() -> f64 {
    1.0
}

/// 管理端录入价格
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePriceTrendRequest {
    pub product_name: String,
    pub week_ending_date: chrono::NaiveDate,
    pub unit_price: f64,
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,
}

impl Validate for CreatePriceTrendRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .required_text("productName", &self.product_name)
            .max_chars("productName", &self.product_name, 200);
        if !(self.unit_price.is_finite() && self.unit_price >= 0.0) {
            errors.add("unitPrice", Constraint::Min, ">= 0");
        }
        if !(self.exchange_rate.is_finite() && self.exchange_rate > 0.0) {
            errors.add("exchangeRate", Constraint::Min, "> 0");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    #[test]
    fn test_query_product_name_camel_case() {
        let query = web::Query::<PriceTrendQuery>::from_query("productName=glyphosate&limit=20")
            .unwrap()
            .into_inner();
        assert_eq!(query.product_name.as_deref(), Some("glyphosate"));
        assert_eq!(query.pagination.limit, 20);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_exchange_rate_defaults_to_one() {
        let req: CreatePriceTrendRequest = serde_json::from_str(
            r#"{"productName":"草甘膦 95% TC","weekEndingDate":"2025-06-06","unitPrice":3.2}"#,
        )
        .unwrap();
        assert_eq!(req.exchange_rate, 1.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let req: CreatePriceTrendRequest = serde_json::from_str(
            r#"{"productName":"x","weekEndingDate":"2025-06-06","unitPrice":-1,"exchangeRate":0}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.violations().len(), 2);
    }
}

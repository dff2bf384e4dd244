use serde::Deserialize;

use crate::models::common::deserialize::option_string_to_i64;
use crate::models::common::{MultilingualText, PaginationQuery};
use crate::utils::validate::{Validate, ValidationErrors};

/// 产品查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLookupQuery {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "option_string_to_i64")]
    pub supplier_id: Option<i64>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl Validate for ProductLookupQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(search) = &self.search {
            errors.max_chars("search", search, 100);
        }
        if let Some(supplier_id) = self.supplier_id {
            errors.min("supplierId", supplier_id, 1);
        }
        if let Err(pagination) = self.pagination.validate() {
            errors.merge(pagination);
        }
        errors.into_result()
    }
}

fn default_listed() -> bool {
    true
}

/// 供应商发布产品
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: MultilingualText,
    pub category: String,
    pub formulation: Option<String>,
    pub active_ingredient: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_listed")]
    pub is_listed: bool,
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .required_text("name.zh-CN", &self.name.zh_cn)
            .max_chars("name.zh-CN", &self.name.zh_cn, 200)
            .required_text("category", &self.category)
            .max_chars("category", &self.category, 64);
        if let Some(ingredient) = &self.active_ingredient {
            errors.max_chars("activeIngredient", ingredient, 200);
        }
        if let Some(description) = &self.description {
            errors.max_chars("description", description, 5000);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    fn parse(query: &str) -> Result<ProductLookupQuery, actix_web::error::QueryPayloadError> {
        web::Query::<ProductLookupQuery>::from_query(query).map(|q| q.into_inner())
    }

    #[test]
    fn test_supplier_id_given_as_string() {
        let query = parse("supplierId=12&page=2").unwrap();
        assert_eq!(query.supplier_id, Some(12));
        assert_eq!(query.pagination.page, 2);
        assert_eq!(query.pagination.limit, 10);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_empty_supplier_id_is_none() {
        let query = parse("supplierId=").unwrap();
        assert_eq!(query.supplier_id, None);
    }

    #[test]
    fn test_non_numeric_supplier_id_rejected() {
        assert!(parse("supplierId=abc").is_err());
    }

    #[test]
    fn test_violations_reported_together() {
        let query = parse("supplierId=0&page=0&limit=100").unwrap();
        let errors = query.validate().unwrap_err();
        let fields: Vec<&str> = errors
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(fields, vec!["supplierId", "page", "limit"]);
    }

    #[test]
    fn test_create_product_defaults_to_listed() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":{"zh-CN":"草甘膦"},"category":"herbicide"}"#).unwrap();
        assert!(req.is_listed);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_product_requires_category() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":{"zh-CN":"草甘膦"},"category":"  "}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.violations()[0].field, "category");
    }
}

use serde::Deserialize;

use super::entities::{CompanySize, CompanyStatus, CompanyType, LicenseDocument};
use crate::models::common::{MultilingualText, PaginationQuery};
use crate::utils::validate::{Validate, ValidationErrors};

/// 供应商查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierLookupQuery {
    pub search: Option<String>,
    pub lang: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl Validate for SupplierLookupQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(search) = &self.search {
            errors.max_chars("search", search, 100);
        }
        if let Some(lang) = &self.lang {
            errors.max_chars("lang", lang, 16);
        }
        if let Err(pagination) = self.pagination.validate() {
            errors.merge(pagination);
        }
        errors.into_result()
    }
}

/// 企业资料更新（仅企业所有者）
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub name: Option<MultilingualText>,
    pub country: Option<String>,
    pub business_categories: Option<Vec<String>>,
    pub company_size: Option<CompanySize>,
    pub license_documents: Option<Vec<LicenseDocument>>,
}

impl Validate for UpdateCompanyRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors
                .required_text("name.zh-CN", &name.zh_cn)
                .max_chars("name.zh-CN", &name.zh_cn, 200);
        }
        if let Some(country) = &self.country {
            errors.max_chars("country", country, 64);
        }
        if let Some(categories) = &self.business_categories {
            for (idx, category) in categories.iter().enumerate() {
                errors.required_text(&format!("businessCategories[{idx}]"), category);
            }
        }
        if let Some(documents) = &self.license_documents {
            for (idx, doc) in documents.iter().enumerate() {
                errors
                    .required_text(&format!("licenseDocuments[{idx}].name"), &doc.name)
                    .required_text(&format!("licenseDocuments[{idx}].url"), &doc.url);
            }
        }
        errors.into_result()
    }
}

/// 管理端企业列表查询
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCompanyListQuery {
    pub status: Option<CompanyStatus>,
    #[serde(rename = "type")]
    pub company_type: Option<CompanyType>,
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl Validate for AdminCompanyListQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.pagination.validate()
    }
}

/// 管理端修改企业状态
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyStatusRequest {
    pub status: CompanyStatus,
}

/// 存储层使用的企业查询条件
#[derive(Debug, Clone, Default)]
pub struct CompanyListFilter {
    pub status: Option<CompanyStatus>,
    pub company_type: Option<CompanyType>,
    pub search: Option<String>,
}

use serde::Serialize;

use super::entities::{Company, CompanyProfile, CompanyType};
use crate::models::common::MultilingualText;

// 企业响应
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

/// 供应商公开信息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSummary {
    pub id: i64,
    pub name: MultilingualText,
    /// 按 `lang` 取出的名称
    pub display_name: String,
    pub company_type: CompanyType,
    pub profile: CompanyProfile,
    pub product_count: i64,
}

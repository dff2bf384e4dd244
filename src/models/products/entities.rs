use serde::{Deserialize, Serialize};

use crate::models::common::MultilingualText;

// 产品实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub supplier_id: i64,
    pub name: MultilingualText,
    pub category: String,
    pub formulation: Option<String>,
    pub active_ingredient: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub is_listed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

use serde::{Deserialize, Serialize};

use crate::models::common::MultilingualText;

// 资讯实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: i64,
    pub title: MultilingualText,
    pub content: MultilingualText,
    pub category: String,
    pub is_published: bool,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub sort_order: i32,
    pub view_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

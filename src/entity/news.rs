//! 资讯实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: Json,
    pub content: Json,
    pub category: String,
    pub is_published: bool,
    pub published_at: Option<i64>,
    pub sort_order: i32,
    pub view_count: i64,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_news(self) -> crate::models::news::entities::News {
        use crate::models::common::MultilingualText;
        use crate::models::news::entities::News;
        use chrono::{DateTime, Utc};

        let id = self.id;
        let decode = |value: Json| {
            serde_json::from_value::<MultilingualText>(value).unwrap_or_else(|e| {
                tracing::warn!("News {} has malformed text: {}", id, e);
                MultilingualText::new("")
            })
        };

        News {
            id: self.id,
            title: decode(self.title),
            content: decode(self.content),
            category: self.category,
            is_published: self.is_published,
            published_at: self
                .published_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            sort_order: self.sort_order,
            view_count: self.view_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

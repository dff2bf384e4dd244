//! 产品实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub supplier_id: i64,
    pub name: Json,
    pub category: String,
    pub formulation: Option<String>,
    pub active_ingredient: Option<String>,
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_listed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::SupplierId",
        to = "super::companies::Column::Id"
    )]
    Supplier,
    #[sea_orm(has_many = "super::inquiries::Entity")]
    Inquiries,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::inquiries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inquiries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_product(self) -> crate::models::products::entities::Product {
        use crate::models::common::MultilingualText;
        use crate::models::products::entities::Product;
        use chrono::{DateTime, Utc};

        let name = serde_json::from_value::<MultilingualText>(self.name).unwrap_or_else(|e| {
            tracing::warn!("Product {} has malformed name: {}", self.id, e);
            MultilingualText::new("")
        });

        Product {
            id: self.id,
            supplier_id: self.supplier_id,
            name,
            category: self.category,
            formulation: self.formulation,
            active_ingredient: self.active_ingredient,
            content: self.content,
            description: self.description,
            is_listed: self.is_listed,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

//! 询价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub inquiry_no: String,
    pub buyer_id: i64,
    pub supplier_id: i64,
    pub product_id: i64,
    pub status: String,
    pub details: Json,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Product,
    #[sea_orm(has_many = "super::inquiry_messages::Entity")]
    Messages,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::inquiry_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 详情 JSON 版本不受支持时返回错误
    pub fn into_inquiry(self) -> crate::errors::Result<crate::models::inquiries::entities::Inquiry> {
        use crate::errors::ArgoChainError;
        use crate::models::inquiries::entities::{Inquiry, InquiryDetails, InquiryStatus};
        use chrono::{DateTime, Utc};

        let details: InquiryDetails = serde_json::from_value(self.details).map_err(|e| {
            ArgoChainError::serialization(format!("Inquiry {} details: {e}", self.id))
        })?;
        let status = self
            .status
            .parse::<InquiryStatus>()
            .map_err(ArgoChainError::serialization)?;

        Ok(Inquiry {
            id: self.id,
            inquiry_no: self.inquiry_no,
            buyer_id: self.buyer_id,
            supplier_id: self.supplier_id,
            product_id: self.product_id,
            status,
            details,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}

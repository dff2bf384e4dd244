//! 企业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Json,
    pub status: String,
    pub company_type: String,
    pub country: Option<String>,
    pub business_categories: Option<Json>,
    pub company_size: Option<String>,
    pub license_documents: Option<Json>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_company(self) -> crate::models::companies::entities::Company {
        use crate::models::common::MultilingualText;
        use crate::models::companies::entities::{
            Company, CompanyProfile, CompanyStatus, CompanyType,
        };
        use chrono::{DateTime, Utc};

        let name = serde_json::from_value::<MultilingualText>(self.name).unwrap_or_else(|e| {
            tracing::warn!("Company {} has malformed name: {}", self.id, e);
            MultilingualText::new("")
        });

        Company {
            id: self.id,
            name,
            status: self
                .status
                .parse::<CompanyStatus>()
                .unwrap_or(CompanyStatus::Inactive),
            company_type: self
                .company_type
                .parse::<CompanyType>()
                .unwrap_or(CompanyType::Buyer),
            profile: CompanyProfile {
                country: self.country,
                business_categories: self
                    .business_categories
                    .and_then(|v| serde_json::from_value(v).ok())
                    .unwrap_or_default(),
                company_size: self.company_size.and_then(|s| s.parse().ok()),
                license_documents: self
                    .license_documents
                    .and_then(|v| serde_json::from_value(v).ok())
                    .unwrap_or_default(),
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

//! 价格走势实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "price_trends")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_name: String,
    pub week_ending_date: Date,
    #[sea_orm(column_type = "Double")]
    pub unit_price: f64,
    pub created_at: i64,
    #[sea_orm(column_type = "Double")]
    pub exchange_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_price_trend(self) -> crate::models::price_trends::entities::PriceTrend {
        use crate::models::price_trends::entities::PriceTrend;
        use chrono::{DateTime, Utc};

        PriceTrend {
            id: self.id,
            product_name: self.product_name,
            week_ending_date: self.week_ending_date,
            unit_price: self.unit_price,
            exchange_rate: self.exchange_rate,
            converted_price: self.unit_price * self.exchange_rate,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

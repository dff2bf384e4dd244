use super::SeaOrmStorage;
use crate::entity::price_trends::{ActiveModel, Column, Entity as PriceTrends};
use crate::errors::{ArgoChainError, Result};
use crate::models::{
    common::PaginatedResponse,
    price_trends::{
        entities::PriceTrend,
        requests::{CreatePriceTrendRequest, PriceTrendQuery},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 价格走势，按周截止日期倒序
    pub async fn list_price_trends_impl(
        &self,
        query: PriceTrendQuery,
    ) -> Result<PaginatedResponse<PriceTrend>> {
        let mut select = PriceTrends::find();
        if let Some(name) = query.product_name.as_deref()
            && !name.trim().is_empty()
        {
            select = select.filter(Column::ProductName.eq(name.trim()));
        }

        let select = select
            .order_by_desc(Column::WeekEndingDate)
            .order_by_desc(Column::Id);
        let (items, pagination) = self.paginate(select, &query.pagination, "价格走势").await?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_price_trend()).collect(),
            pagination,
        })
    }

    /// 录入价格走势
    pub async fn create_price_trend_impl(&self, req: CreatePriceTrendRequest) -> Result<PriceTrend> {
        let model = ActiveModel {
            product_name: Set(req.product_name.trim().to_string()),
            week_ending_date: Set(req.week_ending_date),
            unit_price: Set(req.unit_price),
            exchange_rate: Set(req.exchange_rate),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("录入价格走势失败: {e}")))?;

        Ok(result.into_price_trend())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use super::*;
    use crate::models::PaginationQuery;
    use chrono::NaiveDate;

    fn trend(name: &str, date: (i32, u32, u32), price: f64) -> CreatePriceTrendRequest {
        CreatePriceTrendRequest {
            product_name: name.to_string(),
            week_ending_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            unit_price: price,
            exchange_rate: 7.1,
        }
    }

    #[tokio::test]
    async fn test_filter_and_order() {
        let storage = memory_storage().await;
        storage
            .create_price_trend_impl(trend("草甘膦 95%TC", (2025, 5, 2), 24_500.0))
            .await
            .unwrap();
        storage
            .create_price_trend_impl(trend("草甘膦 95%TC", (2025, 5, 9), 24_800.0))
            .await
            .unwrap();
        storage
            .create_price_trend_impl(trend("百草枯 42%TK", (2025, 5, 16), 13_000.0))
            .await
            .unwrap();

        let page = storage
            .list_price_trends_impl(PriceTrendQuery {
                product_name: Some("草甘膦 95%TC".to_string()),
                pagination: PaginationQuery::default(),
            })
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 2);
        assert_eq!(
            page.items[0].week_ending_date,
            NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()
        );
        assert!((page.items[0].exchange_rate - 7.1).abs() < f64::EPSILON);
        assert!((page.items[0].converted_price - 24_800.0 * 7.1).abs() < 1e-6);

        let json = serde_json::to_value(&page.items[0]).unwrap();
        assert!(json.get("convertedPrice").is_some());

        let all = storage
            .list_price_trends_impl(PriceTrendQuery {
                product_name: None,
                pagination: PaginationQuery::default(),
            })
            .await
            .unwrap();
        assert_eq!(all.items[0].product_name, "百草枯 42%TK");
    }
}

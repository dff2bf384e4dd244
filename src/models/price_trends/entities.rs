use serde::{Deserialize, Serialize};

// 价格走势（按周）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTrend {
    pub id: i64,
    pub product_name: String,
    pub week_ending_date: chrono::NaiveDate,
    pub unit_price: f64,
    pub exchange_rate: f64,
    /// unit_price × exchange_rate
    #[serde(default)]
    pub converted_price: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

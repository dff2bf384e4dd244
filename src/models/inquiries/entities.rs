use serde::{Deserialize, Deserializer, Serialize};

/// 当前询价详情结构版本
pub const INQUIRY_DETAILS_VERSION: u32 = 1;

// 询价状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    PendingQuote,
    Quoted,
    Confirmed,
    Declined,
    Cancelled,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::PendingQuote => "pending_quote",
            InquiryStatus::Quoted => "quoted",
            InquiryStatus::Confirmed => "confirmed",
            InquiryStatus::Declined => "declined",
            InquiryStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_quote" => Ok(InquiryStatus::PendingQuote),
            "quoted" => Ok(InquiryStatus::Quoted),
            "confirmed" => Ok(InquiryStatus::Confirmed),
            "declined" => Ok(InquiryStatus::Declined),
            "cancelled" => Ok(InquiryStatus::Cancelled),
            _ => Err(format!("Invalid inquiry status: {s}")),
        }
    }
}

// 供应商处理优先级
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupplierPriority {
    Low,
    #[default]
    Normal,
    High,
}

fn current_version() -> u32 {
    INQUIRY_DETAILS_VERSION
}

fn known_version<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u32::deserialize(deserializer)?;
    if version != INQUIRY_DETAILS_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported inquiry details version: {version}"
        )));
    }
    Ok(version)
}

/// 询价详情（JSON 列，带版本号）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDetails {
    #[serde(default = "current_version", deserialize_with = "known_version")]
    pub version: u32,
    // 早期数据可能只有 supplierPriority
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_remarks: Option<String>,
    #[serde(default)]
    pub supplier_priority: SupplierPriority,
}

impl InquiryDetails {
    pub fn new(quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            version: INQUIRY_DETAILS_VERSION,
            quantity,
            unit: unit.into(),
            delivery_location: None,
            trade_terms: None,
            payment_method: None,
            buyer_remarks: None,
            supplier_priority: SupplierPriority::default(),
        }
    }
}

// 询价实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub inquiry_no: String,
    pub buyer_id: i64,
    pub supplier_id: i64,
    pub product_id: i64,
    pub status: InquiryStatus,
    pub details: InquiryDetails,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Inquiry {
    /// 企业是否为该询价的买方或卖方
    pub fn involves_company(&self, company_id: i64) -> bool {
        self.buyer_id == company_id || self.supplier_id == company_id
    }
}

// 询价消息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryMessage {
    pub id: i64,
    pub inquiry_id: i64,
    pub sender_id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_priority_reads_as_normal() {
        let details: InquiryDetails =
            serde_json::from_str(r#"{"version":1,"quantity":20,"unit":"ton"}"#).unwrap();
        assert_eq!(details.supplier_priority, SupplierPriority::Normal);
        assert_eq!(details.delivery_location, None);
    }

    #[test]
    fn test_missing_version_reads_as_current() {
        let details: InquiryDetails =
            serde_json::from_str(r#"{"quantity":1.5,"unit":"kg","supplierPriority":"high"}"#)
                .unwrap();
        assert_eq!(details.version, INQUIRY_DETAILS_VERSION);
        assert_eq!(details.supplier_priority, SupplierPriority::High);
    }

    #[test]
    fn test_legacy_details_read_with_defaults() {
        let details: InquiryDetails =
            serde_json::from_str(r#"{"supplierPriority":"normal"}"#).unwrap();
        assert_eq!(details.version, INQUIRY_DETAILS_VERSION);
        assert_eq!(details.quantity, 0.0);
        assert!(details.unit.is_empty());
    }

    #[test]
    fn test_unknown_version_rejected() {
        let result = serde_json::from_str::<InquiryDetails>(
            r#"{"version":2,"quantity":1,"unit":"kg"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let details = InquiryDetails {
            version: 1,
            quantity: 5.0,
            unit: "ton".into(),
            delivery_location: Some("Santos".into()),
            trade_terms: Some("CIF".into()),
            payment_method: None,
            buyer_remarks: None,
            supplier_priority: SupplierPriority::Normal,
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["deliveryLocation"], "Santos");
        assert_eq!(value["supplierPriority"], "normal");
        assert!(value.get("paymentMethod").is_none());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(
            "pending_quote".parse::<InquiryStatus>().unwrap(),
            InquiryStatus::PendingQuote
        );
        assert!("open".parse::<InquiryStatus>().is_err());
    }
}

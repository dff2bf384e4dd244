use serde::Serialize;

use super::entities::{Inquiry, InquiryStatus};

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub inquiry: Inquiry,
}

/// 买方询价统计
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuyerInquiryStatsResponse {
    pub pending_quote: i64,
    pub quoted: i64,
    pub confirmed: i64,
    pub declined: i64,
    pub cancelled: i64,
    pub total: i64,
}

impl BuyerInquiryStatsResponse {
    /// 由 `GROUP BY status` 结果汇总，未知状态只计入 total
    pub fn from_counts<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut stats = Self::default();
        for (status, count) in rows {
            stats.total += count;
            match status.as_ref().parse::<InquiryStatus>() {
                Ok(InquiryStatus::PendingQuote) => stats.pending_quote += count,
                Ok(InquiryStatus::Quoted) => stats.quoted += count,
                Ok(InquiryStatus::Confirmed) => stats.confirmed += count,
                Ok(InquiryStatus::Declined) => stats.declined += count,
                Ok(InquiryStatus::Cancelled) => stats.cancelled += count,
                Err(_) => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts() {
        let stats = BuyerInquiryStatsResponse::from_counts(vec![
            ("pending_quote", 3),
            ("quoted", 2),
            ("cancelled", 1),
        ]);
        assert_eq!(stats.pending_quote, 3);
        assert_eq!(stats.quoted, 2);
        assert_eq!(stats.confirmed, 0);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total, 6);
    }

    #[test]
    fn test_unknown_status_only_in_total() {
        let stats = BuyerInquiryStatsResponse::from_counts(vec![
            ("quoted".to_string(), 1),
            ("archived".to_string(), 4),
        ]);
        assert_eq!(stats.quoted, 1);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn test_empty_is_all_zero() {
        let stats = BuyerInquiryStatsResponse::from_counts(Vec::<(&str, i64)>::new());
        assert_eq!(stats, BuyerInquiryStatsResponse::default());
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["pendingQuote"], 0);
    }
}

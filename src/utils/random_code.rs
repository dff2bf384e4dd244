/// 生成询价单号：`INQ` + 日期 + 8 位随机十六进制
pub fn generate_inquiry_no(now: chrono::DateTime<chrono::Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "INQ{}{}",
        now.format("%Y%m%d"),
        suffix[..8].to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_inquiry_no_format() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 6, 18, 8, 0, 0).unwrap();
        let no = generate_inquiry_no(now);
        assert!(no.starts_with("INQ20250618"));
        assert_eq!(no.len(), 3 + 8 + 8);
        assert!(no[11..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_inquiry_no_unique() {
        let now = chrono::Utc::now();
        assert_ne!(generate_inquiry_no(now), generate_inquiry_no(now));
    }
}

use serde::{Deserialize, Serialize};

use super::deserialize::string_to_i64;
use crate::utils::validate::{Validate, ValidationErrors};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 50;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page", deserialize_with = "string_to_i64")]
    pub page: i64,
    #[serde(default = "default_limit", deserialize_with = "string_to_i64")]
    pub limit: i64,
}

impl PaginationQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// 仅在校验通过后调用
    pub fn page_index(&self) -> u64 {
        (self.page.max(1) - 1) as u64
    }

    pub fn page_size(&self) -> u64 {
        self.limit.clamp(1, MAX_LIMIT) as u64
    }
}

impl Validate for PaginationQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.min("page", self.page, 1);
        errors.range("limit", self.limit, 1, MAX_LIMIT);
        errors.into_result()
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    /// 总页数由总数和页大小推算
    pub fn new(query: &PaginationQuery, total: u64) -> Self {
        let page_size = query.page_size();
        Self {
            page: query.page,
            limit: page_size as i64,
            total: total as i64,
            total_pages: total.div_ceil(page_size) as i64,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    fn parse(query: &str) -> PaginationQuery {
        web::Query::<PaginationQuery>::from_query(query)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn test_defaults_when_absent() {
        let query = parse("");
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_page_below_one_rejected() {
        for page in ["0", "-1", "-100"] {
            let query = parse(&format!("page={page}"));
            let errors = query.validate().unwrap_err();
            assert_eq!(errors.violations()[0].field, "page");
        }
    }

    #[test]
    fn test_limit_bounds() {
        assert!(parse("limit=50").validate().is_ok());
        assert!(parse("limit=1").validate().is_ok());
        assert!(parse("limit=51").validate().is_err());
        assert!(parse("limit=0").validate().is_err());
    }

    #[test]
    fn test_non_numeric_page_is_rejected_by_extractor() {
        assert!(web::Query::<PaginationQuery>::from_query("page=abc").is_err());
    }

    #[test]
    fn test_page_index() {
        let query = PaginationQuery::new(3, 20);
        assert_eq!(query.page_index(), 2);
        assert_eq!(query.page_size(), 20);
    }

    #[test]
    fn test_total_pages_from_total() {
        let query = PaginationQuery::new(1, 10);
        assert_eq!(PaginationInfo::new(&query, 0).total_pages, 0);
        assert_eq!(PaginationInfo::new(&query, 10).total_pages, 1);
        assert_eq!(PaginationInfo::new(&query, 11).total_pages, 2);
        assert_eq!(PaginationInfo::new(&PaginationQuery::new(2, 50), 101).total_pages, 3);
    }
}

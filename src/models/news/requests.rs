use serde::Deserialize;

use crate::models::common::{MultilingualText, PaginationQuery};
use crate::utils::validate::{Validate, ValidationErrors};

/// 资讯列表查询
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsListQuery {
    pub category: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

impl Validate for NewsListQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(category) = &self.category {
            errors.max_chars("category", category, 64);
        }
        if let Err(pagination) = self.pagination.validate() {
            errors.merge(pagination);
        }
        errors.into_result()
    }
}

/// 管理端发布资讯
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    pub title: MultilingualText,
    pub content: MultilingualText,
    pub category: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl Validate for CreateNewsRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .required_text("title.zh-CN", &self.title.zh_cn)
            .max_chars("title.zh-CN", &self.title.zh_cn, 200)
            .required_text("content.zh-CN", &self.content.zh_cn)
            .required_text("category", &self.category)
            .max_chars("category", &self.category, 64);
        errors.into_result()
    }
}

/// 管理端发布/撤回资讯
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishNewsRequest {
    pub is_published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_news_defaults() {
        let req: CreateNewsRequest = serde_json::from_str(
            r#"{"title":{"zh-CN":"市场周报"},"content":{"zh-CN":"内容"},"category":"market"}"#,
        )
        .unwrap();
        assert!(!req.is_published);
        assert_eq!(req.sort_order, 0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_news_blank_title() {
        let req: CreateNewsRequest = serde_json::from_str(
            r#"{"title":{"zh-CN":""},"content":{"zh-CN":"内容"},"category":"market"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.violations()[0].field, "title.zh-CN");
    }
}

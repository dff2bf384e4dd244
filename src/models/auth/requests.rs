use serde::Deserialize;

use crate::models::common::MultilingualText;
use crate::models::companies::entities::CompanyType;
use crate::utils::validate::{Constraint, Validate, ValidationErrors, validate_password};

// 用户登录请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .required_text("email", &self.email)
            .required_text("password", &self.password);
        errors.into_result()
    }
}

/// 注册账户类型
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// 企业账户：创建待审核企业和所有者用户
    Company,
    /// 个人采购商：不关联企业
    Individual,
}

/// 注册时提交的企业信息
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompany {
    pub name: MultilingualText,
    pub company_type: CompanyType,
    pub country: Option<String>,
}

// 用户注册请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub account_type: AccountType,
    pub company: Option<RegisterCompany>,
    pub phone: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .email("email", &self.email)
            .required_text("name", &self.name)
            .max_chars("name", &self.name, 100);

        let password = validate_password(&self.password);
        if !password.is_valid {
            errors.add("password", Constraint::Format, password.error_message());
        }

        match (self.account_type, &self.company) {
            (AccountType::Company, None) => {
                errors.add("company", Constraint::Required, "company information");
            }
            (AccountType::Company, Some(company)) => {
                errors
                    .required_text("company.name.zh-CN", &company.name.zh_cn)
                    .max_chars("company.name.zh-CN", &company.name.zh_cn, 200);
            }
            (AccountType::Individual, Some(_)) => {
                errors.add("company", Constraint::OneOf, "absent for individual accounts");
            }
            (AccountType::Individual, None) => {}
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_account_requires_company() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"owner@agro.com","password":"Agro2025Chain","name":"Li","accountType":"company"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.violations()[0].field, "company");
    }

    #[test]
    fn test_valid_company_registration() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"owner@agro.com","password":"Agro2025Chain","name":"Li",
                "accountType":"company",
                "company":{"name":{"zh-CN":"绿田农化"},"companyType":"supplier"}}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_individual_with_weak_password() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"farmer@agro.com","password":"short","name":"Wang","accountType":"individual"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.violations()[0].field, "password");
    }
}

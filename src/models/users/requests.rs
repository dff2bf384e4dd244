use serde::Deserialize;

use super::entities::{UserRole, UserType};
use crate::utils::validate::{Validate, ValidationErrors};

/// 存储层创建用户，`password_hash` 为已哈希的密码
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub user_type: UserType,
    pub company_id: Option<i64>,
    pub phone: Option<String>,
    pub email_verified: bool,
}

// 个人资料更新请求
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.required_text("name", name).max_chars("name", name, 100);
        }
        if let Some(phone) = &self.phone {
            errors.max_chars("phone", phone, 32);
        }
        if let Some(url) = &self.avatar_url {
            errors.max_chars("avatarUrl", url, 512);
        }
        if let Some(position) = &self.position {
            errors.max_chars("position", position, 100);
        }
        if let Some(department) = &self.department {
            errors.max_chars("department", department, 100);
        }
        errors.into_result()
    }
}

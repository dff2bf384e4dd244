use serde::{Deserialize, Serialize};

use crate::models::common::MultilingualText;

// 企业状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Pending,
    Active,
    Inactive,
    Rejected,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Pending => "pending",
            CompanyStatus::Active => "active",
            CompanyStatus::Inactive => "inactive",
            CompanyStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompanyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CompanyStatus::Pending),
            "active" => Ok(CompanyStatus::Active),
            "inactive" => Ok(CompanyStatus::Inactive),
            "rejected" => Ok(CompanyStatus::Rejected),
            _ => Err(format!(
                "Invalid company status: {s}. Expected one of pending, active, inactive, rejected"
            )),
        }
    }
}

// 企业类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    Buyer,
    Supplier,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Buyer => "buyer",
            CompanyType::Supplier => "supplier",
        }
    }
}

impl std::str::FromStr for CompanyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(CompanyType::Buyer),
            "supplier" => Ok(CompanyType::Supplier),
            _ => Err(format!("Invalid company type: {s}")),
        }
    }
}

// 企业规模
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Enterprise => "enterprise",
        }
    }
}

impl std::str::FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            "enterprise" => Ok(CompanySize::Enterprise),
            _ => Err(format!("Invalid company size: {s}")),
        }
    }
}

/// 资质文件
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LicenseDocument {
    pub name: String,
    pub url: String,
}

/// 企业资料（迁移新增字段）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub country: Option<String>,
    #[serde(default)]
    pub business_categories: Vec<String>,
    pub company_size: Option<CompanySize>,
    #[serde(default)]
    pub license_documents: Vec<LicenseDocument>,
}

// 企业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: MultilingualText,
    pub status: CompanyStatus,
    pub company_type: CompanyType,
    pub profile: CompanyProfile,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Company {
    pub fn is_active(&self) -> bool {
        self.status == CompanyStatus::Active
    }
}

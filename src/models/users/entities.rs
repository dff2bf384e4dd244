use serde::{Deserialize, Serialize};

use crate::utils::jwt::Subject;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Member,        // 企业普通成员
    Owner,         // 企业所有者
    PlatformAdmin, // 平台管理员
}

impl UserRole {
    pub const MEMBER: &'static str = "member";
    pub const OWNER: &'static str = "owner";
    pub const PLATFORM_ADMIN: &'static str = "platform_admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::PlatformAdmin]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => Self::MEMBER,
            UserRole::Owner => Self::OWNER,
            UserRole::PlatformAdmin => Self::PLATFORM_ADMIN,
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: member, owner, platform_admin"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::MEMBER => Ok(UserRole::Member),
            Self::OWNER => Ok(UserRole::Owner),
            Self::PLATFORM_ADMIN => Ok(UserRole::PlatformAdmin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    CompanyMember,
    IndividualBuyer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::CompanyMember => "company_member",
            UserType::IndividualBuyer => "individual_buyer",
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company_member" => Ok(UserType::CompanyMember),
            "individual_buyer" => Ok(UserType::IndividualBuyer),
            _ => Err(format!("Invalid user type: {s}")),
        }
    }
}

// 用户状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Disabled,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Disabled => "disabled",
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "disabled" => Ok(UserStatus::Disabled),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 用户资料
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub join_date: Option<chrono::NaiveDate>,
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub user_type: UserType,
    pub company_id: Option<i64>,
    pub profile: UserProfile,
    pub email_verified: bool,
    pub status: UserStatus,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn subject(&self) -> Subject<'_> {
        Subject {
            user_id: self.id,
            role: self.role.as_str(),
            company_id: self.company_id,
        }
    }

    pub fn is_platform_admin(&self) -> bool {
        self.role == UserRole::PlatformAdmin
    }

    pub fn is_company_owner(&self) -> bool {
        self.role == UserRole::Owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_strings() {
        for role in [UserRole::Member, UserRole::Owner, UserRole::PlatformAdmin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("supervisor".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_deserialize_error_mentions_value() {
        let err = serde_json::from_str::<UserRole>("\"root\"").unwrap_err();
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let now = chrono::Utc::now();
        let user = User {
            id: 1,
            email: "a@b.com".into(),
            password_hash: "secret-hash".into(),
            name: "A".into(),
            role: UserRole::Owner,
            user_type: UserType::CompanyMember,
            company_id: Some(3),
            profile: UserProfile::default(),
            email_verified: false,
            status: UserStatus::Active,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["companyId"], 3);
        assert_eq!(json["userType"], "company_member");
    }
}

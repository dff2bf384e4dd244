//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub company_id: Option<i64>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub user_type: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub join_date: Option<Date>,
    pub email_verified: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Company,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserProfile, UserRole, UserStatus, UserType};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            name: self.name,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Member),
            user_type: self
                .user_type
                .parse::<UserType>()
                .unwrap_or(UserType::CompanyMember),
            company_id: self.company_id,
            profile: UserProfile {
                phone: self.phone,
                avatar_url: self.avatar_url,
                position: self.position,
                department: self.department,
                join_date: self.join_date,
            },
            email_verified: self.email_verified,
            // 未知状态按禁用处理
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Disabled),
            last_login: self
                .last_login
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

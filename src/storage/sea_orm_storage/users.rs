use super::SeaOrmStorage;
use crate::entity::companies::ActiveModel as CompanyActiveModel;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ArgoChainError, Result};
use crate::models::{
    auth::requests::RegisterCompany,
    companies::entities::{Company, CompanyStatus},
    users::{
        entities::{User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

fn user_active_model(req: CreateUserRequest, company_id: Option<i64>, now: i64) -> ActiveModel {
    ActiveModel {
        email: Set(req.email),
        password_hash: Set(req.password_hash),
        name: Set(req.name),
        role: Set(req.role.to_string()),
        status: Set(UserStatus::Active.as_str().to_string()),
        company_id: Set(company_id),
        user_type: Set(req.user_type.as_str().to_string()),
        phone: Set(req.phone),
        email_verified: Set(req.email_verified),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();
        let company_id = req.company_id;

        let result = user_active_model(req, company_id, now)
            .insert(&self.db)
            .await
            .map_err(|e| Self::write_error("创建用户失败", e))?;

        Ok(result.into_user())
    }

    /// 注册企业账户：同一事务内创建待审核企业和所有者
    pub async fn register_company_owner_impl(
        &self,
        company: RegisterCompany,
        owner: CreateUserRequest,
    ) -> Result<(Company, User)> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("开启事务失败: {e}")))?;

        let company_model = CompanyActiveModel {
            name: Set(company.name.to_value()),
            status: Set(CompanyStatus::Pending.as_str().to_string()),
            company_type: Set(company.company_type.as_str().to_string()),
            country: Set(company.country),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ArgoChainError::database_operation(format!("创建企业失败: {e}")))?;

        let user_model = user_active_model(owner, Some(company_model.id), now)
            .insert(&txn)
            .await
            .map_err(|e| Self::write_error("创建用户失败", e))?;

        txn.commit()
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((company_model.into_company(), user_model.into_user()))
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 更新个人资料
    pub async fn update_user_profile_impl(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(avatar_url) = update.avatar_url {
            model.avatar_url = Set(Some(avatar_url));
        }
        if let Some(position) = update.position {
            model.position = Set(Some(position));
        }
        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新用户失败: {e}")))?;

        Ok(Some(result.into_user()))
    }

    /// 更新最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Users::update_many()
            .col_expr(Column::LastLogin, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按邮箱重置密码哈希
    pub async fn update_password_by_email_impl(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Users::update_many()
            .col_expr(Column::PasswordHash, Expr::value(password_hash))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记邮箱已验证
    pub async fn mark_email_verified_impl(&self, email: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Users::update_many()
            .col_expr(Column::EmailVerified, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新邮箱验证失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 平台管理员数量
    pub async fn count_platform_admins_impl(&self) -> Result<u64> {
        Users::find()
            .filter(Column::Role.eq(UserRole::PlatformAdmin.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("统计管理员失败: {e}")))
    }
}

//! 运维任务
//!
//! 每个任务使用一条连接执行一条语句，无论成功与否都会释放连接。
//! 影响 0 行视为失败（目标不存在）。

use crate::config::AppConfig;
use crate::errors::{ArgoChainError, Result};
use crate::models::companies::entities::CompanyStatus;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::password::{generate_password, hash_password};

/// 自动生成密码的长度
pub const GENERATED_PASSWORD_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceTask {
    ActivateCompany { id: i64 },
    SetCompanyStatus { id: i64, status: CompanyStatus },
    ResetPassword { email: String, password: Option<String> },
    VerifyEmail { email: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub summary: String,
    /// 仅在自动生成密码时返回，调用方负责输出一次
    pub generated_password: Option<String>,
}

impl TaskOutcome {
    fn done(summary: String) -> Self {
        Self {
            summary,
            generated_password: None,
        }
    }
}

fn require_rows(updated: bool, what: String) -> Result<()> {
    if updated {
        Ok(())
    } else {
        Err(ArgoChainError::not_found(what))
    }
}

/// 在已有连接上执行任务
pub async fn execute(storage: &SeaOrmStorage, task: &MaintenanceTask) -> Result<TaskOutcome> {
    match task {
        MaintenanceTask::ActivateCompany { id } => {
            let updated = storage.update_company_status(*id, CompanyStatus::Active).await?;
            require_rows(updated, format!("company {id}"))?;
            Ok(TaskOutcome::done(format!("company {id} activated")))
        }
        MaintenanceTask::SetCompanyStatus { id, status } => {
            let updated = storage.update_company_status(*id, *status).await?;
            require_rows(updated, format!("company {id}"))?;
            Ok(TaskOutcome::done(format!("company {id} status set to {status}")))
        }
        MaintenanceTask::ResetPassword { email, password } => {
            let email = email.trim().to_lowercase();
            let (password, generated) = match password {
                Some(password) => (password.clone(), false),
                None => (generate_password(GENERATED_PASSWORD_LEN), true),
            };
            let password_hash = hash_password(&password)?;
            let updated = storage.update_password_by_email(&email, &password_hash).await?;
            require_rows(updated, format!("user {email}"))?;
            Ok(TaskOutcome {
                summary: format!("password reset for {email}"),
                generated_password: generated.then_some(password),
            })
        }
        MaintenanceTask::VerifyEmail { email } => {
            let email = email.trim().to_lowercase();
            let updated = storage.mark_email_verified(&email).await?;
            require_rows(updated, format!("user {email}"))?;
            Ok(TaskOutcome::done(format!("email verified for {email}")))
        }
    }
}

/// 按配置连接数据库执行任务，最后总是关闭连接
pub async fn run(task: MaintenanceTask) -> Result<TaskOutcome> {
    let config = AppConfig::get();
    let storage = SeaOrmStorage::connect(&config.database.url, 1).await?;

    let outcome = execute(&storage, &task).await;

    if let Err(e) = storage.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    } else {
        tracing::debug!("Database connection closed");
    }

    outcome
}

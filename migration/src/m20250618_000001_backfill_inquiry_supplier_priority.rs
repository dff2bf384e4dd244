//! 为历史询价单的 details 补齐 supplierPriority 字段
//!
//! JSON 函数因数据库而异，这里按后端分别生成 SQL。

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn backfill_sql(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => {
            r#"UPDATE inquiries
               SET details = jsonb_set(details::jsonb, '{supplierPriority}', '"normal"')::json
               WHERE details::jsonb ->> 'supplierPriority' IS NULL"#
        }
        DatabaseBackend::Sqlite => {
            r#"UPDATE inquiries
               SET details = json_set(details, '$.supplierPriority', 'normal')
               WHERE json_extract(details, '$.supplierPriority') IS NULL"#
        }
        _ => {
            r#"UPDATE inquiries
               SET details = JSON_SET(details, '$.supplierPriority', 'normal')
               WHERE JSON_EXTRACT(details, '$.supplierPriority') IS NULL"#
        }
    }
}

fn revert_sql(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => {
            r#"UPDATE inquiries
               SET details = (details::jsonb - 'supplierPriority')::json
               WHERE details::jsonb ->> 'supplierPriority' = 'normal'"#
        }
        DatabaseBackend::Sqlite => {
            r#"UPDATE inquiries
               SET details = json_remove(details, '$.supplierPriority')
               WHERE json_extract(details, '$.supplierPriority') = 'normal'"#
        }
        _ => {
            r#"UPDATE inquiries
               SET details = JSON_REMOVE(details, '$.supplierPriority')
               WHERE JSON_UNQUOTE(JSON_EXTRACT(details, '$.supplierPriority')) = 'normal'"#
        }
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = backfill_sql(manager.get_database_backend());
        let result = manager.get_connection().execute_unprepared(sql).await?;
        tracing::info!(
            "Backfilled supplierPriority on {} inquiries",
            result.rows_affected()
        );
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = revert_sql(manager.get_database_backend());
        manager.get_connection().execute_unprepared(sql).await?;
        Ok(())
    }
}

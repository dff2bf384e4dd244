//! 清理重复的数据字典项并加唯一约束
//!
//! 删除是破坏性的：down 只移除唯一索引，被删除的行无法恢复。

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

const UNIQUE_INDEX: &str = "uq_dictionary_items_code_value";

// 每组 (dictionary_code, value) 保留 id 最小的一行。
// 派生表包一层是为了兼容 MySQL 不允许在子查询中直接引用被删除的表。
const DELETE_DUPLICATES_SQL: &str = r#"DELETE FROM dictionary_items
    WHERE id NOT IN (
        SELECT keep_id FROM (
            SELECT MIN(id) AS keep_id
            FROM dictionary_items
            GROUP BY dictionary_code, value
        ) AS keepers
    )"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let result = manager
            .get_connection()
            .execute_unprepared(DELETE_DUPLICATES_SQL)
            .await?;
        tracing::warn!(
            "Removed {} duplicate dictionary items",
            result.rows_affected()
        );

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(UNIQUE_INDEX)
                    .table(DictionaryItems::Table)
                    .col(DictionaryItems::DictionaryCode)
                    .col(DictionaryItems::Value)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::warn!(
            "Dropping {}; dictionary items removed by this migration are not restored",
            UNIQUE_INDEX
        );
        manager
            .drop_index(
                Index::drop()
                    .name(UNIQUE_INDEX)
                    .table(DictionaryItems::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum DictionaryItems {
    #[sea_orm(iden = "dictionary_items")]
    Table,
    DictionaryCode,
    Value,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(News::Title).json().not_null())
                    .col(ColumnDef::new(News::Content).json().not_null())
                    .col(ColumnDef::new(News::Category).string().not_null())
                    .col(
                        ColumnDef::new(News::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(News::PublishedAt).big_integer().null())
                    .col(
                        ColumnDef::new(News::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(News::ViewCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(News::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(News::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(News::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_news_category")
                    .table(News::Table)
                    .col(News::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_news_published")
                    .table(News::Table)
                    .col(News::IsPublished)
                    .col(News::PublishedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum News {
    #[sea_orm(iden = "news")]
    Table,
    Id,
    Title,
    Content,
    Category,
    IsPublished,
    PublishedAt,
    SortOrder,
    ViewCount,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite 不支持单条 ALTER 语句添加多列，逐列添加
        let columns = [
            ColumnDef::new(Companies::Country).string().null().to_owned(),
            ColumnDef::new(Companies::BusinessCategories)
                .json()
                .null()
                .to_owned(),
            ColumnDef::new(Companies::CompanySize).string().null().to_owned(),
            ColumnDef::new(Companies::LicenseDocuments)
                .json()
                .null()
                .to_owned(),
        ];

        for column in columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Companies::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Companies::LicenseDocuments,
            Companies::CompanySize,
            Companies::BusinessCategories,
            Companies::Country,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Companies::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Companies {
    #[sea_orm(iden = "companies")]
    Table,
    Country,
    BusinessCategories,
    CompanySize,
    LicenseDocuments,
}

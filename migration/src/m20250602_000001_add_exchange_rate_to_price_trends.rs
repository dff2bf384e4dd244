use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 历史记录按 1.0 汇率补齐
        manager
            .alter_table(
                Table::alter()
                    .table(PriceTrends::Table)
                    .add_column(
                        ColumnDef::new(PriceTrends::ExchangeRate)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(PriceTrends::Table)
                    .drop_column(PriceTrends::ExchangeRate)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum PriceTrends {
    #[sea_orm(iden = "price_trends")]
    Table,
    ExchangeRate,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let columns = [
            ColumnDef::new(Users::UserType)
                .string()
                .not_null()
                .default("company_member")
                .to_owned(),
            ColumnDef::new(Users::Phone).string().null().to_owned(),
            ColumnDef::new(Users::AvatarUrl).string().null().to_owned(),
            ColumnDef::new(Users::Position).string().null().to_owned(),
            ColumnDef::new(Users::Department).string().null().to_owned(),
            ColumnDef::new(Users::JoinDate).date().null().to_owned(),
            ColumnDef::new(Users::EmailVerified)
                .boolean()
                .not_null()
                .default(false)
                .to_owned(),
        ];

        for column in columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Users::EmailVerified,
            Users::JoinDate,
            Users::Department,
            Users::Position,
            Users::AvatarUrl,
            Users::Phone,
            Users::UserType,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    UserType,
    Phone,
    AvatarUrl,
    Position,
    Department,
    JoinDate,
    EmailVerified,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 企业表
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).json().not_null())
                    .col(
                        ColumnDef::new(Companies::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Companies::CompanyType).string().not_null())
                    .col(ColumnDef::new(Companies::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Companies::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 用户表（个人采购商没有所属企业，company_id 可为空）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::CompanyId).big_integer().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 产品表
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::SupplierId).big_integer().not_null())
                    .col(ColumnDef::new(Products::Name).json().not_null())
                    .col(ColumnDef::new(Products::Category).string().not_null())
                    .col(ColumnDef::new(Products::Formulation).string().null())
                    .col(ColumnDef::new(Products::ActiveIngredient).string().null())
                    .col(ColumnDef::new(Products::Content).string().null())
                    .col(ColumnDef::new(Products::Description).text().null())
                    .col(
                        ColumnDef::new(Products::IsListed)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Products::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Products::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Products::Table, Products::SupplierId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 询价单表
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Inquiries::InquiryNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Inquiries::BuyerId).big_integer().not_null())
                    .col(ColumnDef::new(Inquiries::SupplierId).big_integer().not_null())
                    .col(ColumnDef::new(Inquiries::ProductId).big_integer().not_null())
                    .col(ColumnDef::new(Inquiries::Status).string().not_null())
                    .col(ColumnDef::new(Inquiries::Details).json().not_null())
                    .col(ColumnDef::new(Inquiries::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Inquiries::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Inquiries::Table, Inquiries::BuyerId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Inquiries::Table, Inquiries::SupplierId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Inquiries::Table, Inquiries::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 询价消息表
        manager
            .create_table(
                Table::create()
                    .table(InquiryMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InquiryMessages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InquiryMessages::InquiryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InquiryMessages::SenderId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InquiryMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(InquiryMessages::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InquiryMessages::Table, InquiryMessages::InquiryId)
                            .to(Inquiries::Table, Inquiries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InquiryMessages::Table, InquiryMessages::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 价格走势表
        manager
            .create_table(
                Table::create()
                    .table(PriceTrends::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceTrends::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PriceTrends::ProductName).string().not_null())
                    .col(ColumnDef::new(PriceTrends::WeekEndingDate).date().not_null())
                    .col(ColumnDef::new(PriceTrends::UnitPrice).double().not_null())
                    .col(
                        ColumnDef::new(PriceTrends::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 数据字典表
        manager
            .create_table(
                Table::create()
                    .table(DictionaryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DictionaryItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DictionaryItems::DictionaryCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DictionaryItems::Value).string().not_null())
                    .col(ColumnDef::new(DictionaryItems::Label).json().not_null())
                    .col(
                        ColumnDef::new(DictionaryItems::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_companies_status_type")
                    .table(Companies::Table)
                    .col(Companies::Status)
                    .col(Companies::CompanyType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_company_id")
                    .table(Users::Table)
                    .col(Users::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_supplier_id")
                    .table(Products::Table)
                    .col(Products::SupplierId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inquiries_buyer_status")
                    .table(Inquiries::Table)
                    .col(Inquiries::BuyerId)
                    .col(Inquiries::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inquiries_supplier_id")
                    .table(Inquiries::Table)
                    .col(Inquiries::SupplierId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inquiry_messages_inquiry_id")
                    .table(InquiryMessages::Table)
                    .col(InquiryMessages::InquiryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_price_trends_product_week")
                    .table(PriceTrends::Table)
                    .col(PriceTrends::ProductName)
                    .col(PriceTrends::WeekEndingDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dictionary_items_code")
                    .table(DictionaryItems::Table)
                    .col(DictionaryItems::DictionaryCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(DictionaryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PriceTrends::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InquiryMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Companies {
    #[sea_orm(iden = "companies")]
    Table,
    Id,
    Name,
    Status,
    CompanyType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    Status,
    CompanyId,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    SupplierId,
    Name,
    Category,
    Formulation,
    ActiveIngredient,
    Content,
    Description,
    IsListed,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Inquiries {
    #[sea_orm(iden = "inquiries")]
    Table,
    Id,
    InquiryNo,
    BuyerId,
    SupplierId,
    ProductId,
    Status,
    Details,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InquiryMessages {
    #[sea_orm(iden = "inquiry_messages")]
    Table,
    Id,
    InquiryId,
    SenderId,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PriceTrends {
    #[sea_orm(iden = "price_trends")]
    Table,
    Id,
    ProductName,
    WeekEndingDate,
    UnitPrice,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DictionaryItems {
    #[sea_orm(iden = "dictionary_items")]
    Table,
    Id,
    DictionaryCode,
    Value,
    Label,
    SortOrder,
}

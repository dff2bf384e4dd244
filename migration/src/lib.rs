pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_tables;
mod m20250412_000001_add_company_profile_fields;
mod m20250428_000001_add_user_profile_fields;
mod m20250515_000001_create_news;
mod m20250602_000001_add_exchange_rate_to_price_trends;
mod m20250618_000001_backfill_inquiry_supplier_priority;
mod m20250703_000001_dedupe_dictionary_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_tables::Migration),
            Box::new(m20250412_000001_add_company_profile_fields::Migration),
            Box::new(m20250428_000001_add_user_profile_fields::Migration),
            Box::new(m20250515_000001_create_news::Migration),
            Box::new(m20250602_000001_add_exchange_rate_to_price_trends::Migration),
            Box::new(m20250618_000001_backfill_inquiry_supplier_priority::Migration),
            Box::new(m20250703_000001_dedupe_dictionary_items::Migration),
        ]
    }
}

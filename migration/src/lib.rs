pub use sea_orm_migration::prelude::*;

mod m20251017_000001_create_category_table;
mod m20251017_000002_create_shop_user_table;
mod m20251017_000003_create_product_table;
mod m20251017_000004_create_purchase_order_table;
mod m20251017_000005_create_order_product_table;
mod m20251017_000006_create_point_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_create_category_table::Migration),
            Box::new(m20251017_000002_create_shop_user_table::Migration),
            Box::new(m20251017_000003_create_product_table::Migration),
            Box::new(m20251017_000004_create_purchase_order_table::Migration),
            Box::new(m20251017_000005_create_order_product_table::Migration),
            Box::new(m20251017_000006_create_point_table::Migration),
        ]
    }
}

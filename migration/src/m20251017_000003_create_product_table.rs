use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_create_category_table::Category;

static IDX_PRODUCT_CATEGORY_ID: &str = "idx_product_category_id";
static FK_PRODUCT_CATEGORY_ID: &str = "fk_product_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_null(Product::Name))
                    .col(string_null(Product::Price))
                    .col(integer_null(Product::Stock))
                    .col(big_integer_null(Product::CategoryId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_CATEGORY_ID)
                    .table(Product::Table)
                    .col(Product::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_CATEGORY_ID)
                    .from_tbl(Product::Table)
                    .from_col(Product::CategoryId)
                    .to_tbl(Category::Table)
                    .to_col(Category::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_CATEGORY_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_CATEGORY_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Price,
    Stock,
    CategoryId,
}

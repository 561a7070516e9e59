use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000003_create_product_table::Product,
    m20251017_000004_create_purchase_order_table::PurchaseOrder,
};

static PK_ORDER_PRODUCT: &str = "pk_order_product";
static IDX_ORDER_PRODUCT_PRODUCT_ID: &str = "idx_order_product_product_id";
static FK_ORDER_PRODUCT_ORDER_ID: &str = "fk_order_product_order_id";
static FK_ORDER_PRODUCT_PRODUCT_ID: &str = "fk_order_product_product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderProduct::Table)
                    .if_not_exists()
                    .col(big_integer(OrderProduct::OrderId))
                    .col(big_integer(OrderProduct::ProductId))
                    .primary_key(
                        Index::create()
                            .name(PK_ORDER_PRODUCT)
                            .col(OrderProduct::OrderId)
                            .col(OrderProduct::ProductId),
                    )
                    .to_owned(),
            )
            .await?;

        // The composite primary key already covers lookups by order_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_PRODUCT_PRODUCT_ID)
                    .table(OrderProduct::Table)
                    .col(OrderProduct::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_PRODUCT_ORDER_ID)
                    .from_tbl(OrderProduct::Table)
                    .from_col(OrderProduct::OrderId)
                    .to_tbl(PurchaseOrder::Table)
                    .to_col(PurchaseOrder::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_PRODUCT_PRODUCT_ID)
                    .from_tbl(OrderProduct::Table)
                    .from_col(OrderProduct::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_PRODUCT_PRODUCT_ID)
                    .table(OrderProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_PRODUCT_ORDER_ID)
                    .table(OrderProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_PRODUCT_PRODUCT_ID)
                    .table(OrderProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrderProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OrderProduct {
    Table,
    OrderId,
    ProductId,
}

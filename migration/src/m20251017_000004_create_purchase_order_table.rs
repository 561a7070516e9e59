use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000002_create_shop_user_table::ShopUser;

static IDX_PURCHASE_ORDER_USER_ID: &str = "idx_purchase_order_user_id";
static FK_PURCHASE_ORDER_USER_ID: &str = "fk_purchase_order_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PurchaseOrder::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(date_null(PurchaseOrder::Date))
                    .col(big_integer_null(PurchaseOrder::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PURCHASE_ORDER_USER_ID)
                    .table(PurchaseOrder::Table)
                    .col(PurchaseOrder::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PURCHASE_ORDER_USER_ID)
                    .from_tbl(PurchaseOrder::Table)
                    .from_col(PurchaseOrder::UserId)
                    .to_tbl(ShopUser::Table)
                    .to_col(ShopUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PURCHASE_ORDER_USER_ID)
                    .table(PurchaseOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PURCHASE_ORDER_USER_ID)
                    .table(PurchaseOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PurchaseOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PurchaseOrder {
    Table,
    Id,
    Date,
    UserId,
}

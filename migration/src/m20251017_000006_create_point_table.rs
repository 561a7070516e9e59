use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000002_create_shop_user_table::ShopUser;

static IDX_POINT_USER_ID: &str = "idx_point_user_id";
static FK_POINT_USER_ID: &str = "fk_point_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Point::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Point::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_null(Point::Quantity))
                    .col(date_null(Point::Date))
                    .col(big_integer_null(Point::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POINT_USER_ID)
                    .table(Point::Table)
                    .col(Point::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POINT_USER_ID)
                    .from_tbl(Point::Table)
                    .from_col(Point::UserId)
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
                    .name(FK_POINT_USER_ID)
                    .table(Point::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POINT_USER_ID)
                    .table(Point::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Point::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Point {
    Table,
    Id,
    Quantity,
    Date,
    UserId,
}

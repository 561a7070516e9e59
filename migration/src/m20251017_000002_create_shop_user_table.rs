use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShopUser::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_null(ShopUser::Name))
                    .col(string_null(ShopUser::Email))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopUser {
    Table,
    Id,
    Name,
    Email,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spot::Table)
                    .if_not_exists()
                    .col(pk_auto(Spot::Id))
                    .col(integer(Spot::OwnerId))
                    .col(string(Spot::Address))
                    .col(string(Spot::City))
                    .col(string(Spot::State))
                    .col(string(Spot::Country))
                    .col(double(Spot::Lat))
                    .col(double(Spot::Lng))
                    .col(string(Spot::Name))
                    .col(text(Spot::Description))
                    .col(double(Spot::Price))
                    .col(
                        timestamp(Spot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Spot::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spot_owner_id")
                            .from(Spot::Table, Spot::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Spot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Spot {
    Table,
    Id,
    OwnerId,
    Address,
    City,
    State,
    Country,
    Lat,
    Lng,
    Name,
    Description,
    Price,
    CreatedAt,
    UpdatedAt,
}

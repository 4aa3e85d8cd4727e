use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_spot_table::Spot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpotImage::Table)
                    .if_not_exists()
                    .col(pk_auto(SpotImage::Id))
                    .col(integer(SpotImage::SpotId))
                    .col(string(SpotImage::Url))
                    .col(boolean(SpotImage::Preview))
                    .col(
                        timestamp(SpotImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(SpotImage::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spot_image_spot_id")
                            .from(SpotImage::Table, SpotImage::SpotId)
                            .to(Spot::Table, Spot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpotImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpotImage {
    Table,
    Id,
    SpotId,
    Url,
    Preview,
    CreatedAt,
    UpdatedAt,
}

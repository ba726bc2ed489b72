use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000001_create_series_table::Series;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_uuid(Season::Id))
                    .col(uuid(Season::SeriesId))
                    .col(integer(Season::SeasonNumber))
                    .col(string(Season::Title))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_series_id")
                            .from(Season::Table, Season::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    #[sea_orm(iden = "seasons")]
    Table,
    Id,
    SeriesId,
    SeasonNumber,
    Title,
}

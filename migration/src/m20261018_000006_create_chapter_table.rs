use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000005_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_uuid(Chapter::Id))
                    .col(uuid(Chapter::SeasonId))
                    .col(integer(Chapter::ChapterNumber))
                    .col(string(Chapter::Title))
                    .col(string(Chapter::Status).default("draft"))
                    .col(timestamp_with_time_zone_null(Chapter::PublishedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_season_id")
                            .from(Chapter::Table, Chapter::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapter {
    #[sea_orm(iden = "chapters")]
    Table,
    Id,
    SeasonId,
    ChapterNumber,
    Title,
    Status,
    PublishedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_series_table::Series, m20261018_000002_create_tag_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeriesTag::Table)
                    .if_not_exists()
                    .col(uuid(SeriesTag::SeriesId))
                    .col(uuid(SeriesTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(SeriesTag::SeriesId)
                            .col(SeriesTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_series_tag_series_id")
                            .from(SeriesTag::Table, SeriesTag::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_series_tag_tag_id")
                            .from(SeriesTag::Table, SeriesTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeriesTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeriesTag {
    #[sea_orm(iden = "series_tags")]
    Table,
    SeriesId,
    TagId,
}

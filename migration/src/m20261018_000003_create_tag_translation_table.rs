use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000002_create_tag_table::Tag;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagTranslation::Table)
                    .if_not_exists()
                    .col(pk_uuid(TagTranslation::Id))
                    .col(uuid(TagTranslation::TagId))
                    .col(string(TagTranslation::Language))
                    .col(string(TagTranslation::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_translation_tag_id")
                            .from(TagTranslation::Table, TagTranslation::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tag_translations_tag_id")
                    .table(TagTranslation::Table)
                    .col(TagTranslation::TagId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tag_translations_language")
                    .table(TagTranslation::Table)
                    .col(TagTranslation::Language)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TagTranslation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TagTranslation {
    #[sea_orm(iden = "tag_translations")]
    Table,
    Id,
    TagId,
    Language,
    Name,
}

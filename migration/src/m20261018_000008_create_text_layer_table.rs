use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000007_create_chapter_image_table::ChapterImage;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TextLayer::Table)
                    .if_not_exists()
                    .col(pk_uuid(TextLayer::Id))
                    .col(uuid(TextLayer::ChapterImageId))
                    .col(text(TextLayer::OriginalText))
                    .col(integer(TextLayer::PositionX))
                    .col(integer(TextLayer::PositionY))
                    .col(integer(TextLayer::Width))
                    .col(integer(TextLayer::Height))
                    .col(json_binary_null(TextLayer::StyleJson))
                    .col(string(TextLayer::LayerType).default("bubble"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_text_layer_chapter_image_id")
                            .from(TextLayer::Table, TextLayer::ChapterImageId)
                            .to(ChapterImage::Table, ChapterImage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TextLayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TextLayer {
    #[sea_orm(iden = "text_layers")]
    Table,
    Id,
    ChapterImageId,
    OriginalText,
    PositionX,
    PositionY,
    Width,
    Height,
    StyleJson,
    LayerType,
}

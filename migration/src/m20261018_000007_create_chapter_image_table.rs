use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000006_create_chapter_table::Chapter;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChapterImage::Table)
                    .if_not_exists()
                    .col(pk_uuid(ChapterImage::Id))
                    .col(uuid(ChapterImage::ChapterId))
                    .col(string(ChapterImage::ImageUrl))
                    .col(integer(ChapterImage::DisplayOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_image_chapter_id")
                            .from(ChapterImage::Table, ChapterImage::ChapterId)
                            .to(Chapter::Table, Chapter::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChapterImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChapterImage {
    #[sea_orm(iden = "chapter_images")]
    Table,
    Id,
    ChapterId,
    ImageUrl,
    DisplayOrder,
}

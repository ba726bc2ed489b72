use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000008_create_text_layer_table::TextLayer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique (text_layer_id, language_code) constraint: each translate
        // request appends a row.
        manager
            .create_table(
                Table::create()
                    .table(Translation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Translation::Id))
                    .col(uuid(Translation::TextLayerId))
                    .col(string_len(Translation::LanguageCode, 5))
                    .col(text(Translation::TranslatedText))
                    .col(boolean(Translation::IsMachineTranslated).default(false))
                    .col(boolean(Translation::Verified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_translation_text_layer_id")
                            .from(Translation::Table, Translation::TextLayerId)
                            .to(TextLayer::Table, TextLayer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Translation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Translation {
    #[sea_orm(iden = "translations")]
    Table,
    Id,
    TextLayerId,
    LanguageCode,
    TranslatedText,
    IsMachineTranslated,
    Verified,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(pk_uuid(Series::Id))
                    .col(uuid(Series::CreatorId))
                    .col(json_binary(Series::Title))
                    .col(json_binary(Series::Subtitle))
                    .col(json_binary(Series::Description))
                    .col(string(Series::Author))
                    .col(json_binary(Series::Genres))
                    .col(string(Series::ThumbnailUrl))
                    .col(string(Series::CoverImageUrl))
                    .col(string(Series::BannerImageUrl))
                    .col(string(Series::Status).default("draft"))
                    .col(string(Series::Visibility).default("public"))
                    .col(boolean(Series::Nsfw).default(false))
                    .col(timestamp_with_time_zone_null(Series::SchedulePublishAt))
                    .col(boolean(Series::MonetizationEnabled).default(false))
                    .col(string(Series::MonetizationType))
                    .col(string(Series::DefaultUnlockType))
                    .col(
                        timestamp_with_time_zone(Series::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Series::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_series_updated_at")
                    .table(Series::Table)
                    .col(Series::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Series {
    Table,
    Id,
    CreatorId,
    Title,
    Subtitle,
    Description,
    Author,
    Genres,
    ThumbnailUrl,
    CoverImageUrl,
    BannerImageUrl,
    Status,
    Visibility,
    Nsfw,
    SchedulePublishAt,
    MonetizationEnabled,
    MonetizationType,
    DefaultUnlockType,
    CreatedAt,
    UpdatedAt,
}

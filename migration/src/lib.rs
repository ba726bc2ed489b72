pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_series_table;
mod m20261018_000002_create_tag_table;
mod m20261018_000003_create_tag_translation_table;
mod m20261018_000004_create_series_tag_table;
mod m20261018_000005_create_season_table;
mod m20261018_000006_create_chapter_table;
mod m20261018_000007_create_chapter_image_table;
mod m20261018_000008_create_text_layer_table;
mod m20261018_000009_create_translation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_series_table::Migration),
            Box::new(m20261018_000002_create_tag_table::Migration),
            Box::new(m20261018_000003_create_tag_translation_table::Migration),
            Box::new(m20261018_000004_create_series_tag_table::Migration),
            Box::new(m20261018_000005_create_season_table::Migration),
            Box::new(m20261018_000006_create_chapter_table::Migration),
            Box::new(m20261018_000007_create_chapter_image_table::Migration),
            Box::new(m20261018_000008_create_text_layer_table::Migration),
            Box::new(m20261018_000009_create_translation_table::Migration),
        ]
    }
}

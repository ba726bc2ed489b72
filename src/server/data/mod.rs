//! Database repository layer for the content hierarchy.
//!
//! Each store is described by a capability trait so the service layer stays
//! storage-agnostic. The SeaORM implementations borrow the shared connection,
//! read and write entity models, and hand domain models back to the caller.
//! Lookups return `Ok(None)` for absent identities; every storage failure is
//! surfaced as `DbErr`.

pub mod comic;
pub mod layer;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::server::model::{
    chapter::{Chapter, ChapterImage},
    layer::{TextLayer, Translation},
    series::{Season, Series},
};

/// Maximum number of series returned by `ComicRepository::list_series`.
pub const LIST_SERIES_LIMIT: u64 = 20;

/// Storage capabilities for the series → season → chapter → image tree.
#[async_trait]
pub trait ComicRepository: Send + Sync {
    /// Persists a series together with its tags in a single unit.
    async fn create_series(&self, series: Series) -> Result<Series, DbErr>;

    /// Fetches a series with its tags, seasons and chapters. Images are not loaded.
    async fn get_series_by_id(&self, id: Uuid) -> Result<Option<Series>, DbErr>;

    /// Fetches a chapter with its images, their text layers and translations.
    async fn get_chapter_by_id(&self, id: Uuid) -> Result<Option<Chapter>, DbErr>;

    /// Most recently updated series first, capped at `LIST_SERIES_LIMIT`.
    async fn list_series(&self) -> Result<Vec<Series>, DbErr>;

    async fn create_season(&self, season: Season) -> Result<Season, DbErr>;

    async fn create_chapter(&self, chapter: Chapter) -> Result<Chapter, DbErr>;

    async fn create_chapter_image(&self, image: ChapterImage) -> Result<ChapterImage, DbErr>;
}

/// Storage capabilities for text layers and their translations.
#[async_trait]
pub trait LayerRepository: Send + Sync {
    async fn create_layer(&self, layer: TextLayer) -> Result<TextLayer, DbErr>;

    /// Layers on an image, each with its translations.
    async fn get_layers_by_image_id(&self, image_id: Uuid) -> Result<Vec<TextLayer>, DbErr>;

    /// Single layer without translations.
    async fn find_layer(&self, id: Uuid) -> Result<Option<TextLayer>, DbErr>;

    async fn create_translation(&self, translation: Translation) -> Result<Translation, DbErr>;
}

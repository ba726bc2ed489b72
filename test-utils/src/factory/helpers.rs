//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique, human-readable names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a series with one season and one chapter using defaults.
///
/// # Returns
/// - `Ok((series, season, chapter))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_chapter_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::series::Model,
        entity::season::Model,
        entity::chapter::Model,
    ),
    DbErr,
> {
    let series = crate::factory::series::create_series(db).await?;
    let season = crate::factory::season::create_season(db, series.id).await?;
    let chapter = crate::factory::chapter::create_chapter(db, season.id).await?;

    Ok((series, season, chapter))
}

/// Creates a full branch of the hierarchy down to a single page image.
///
/// # Returns
/// - `Ok((series, season, chapter, image))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_image_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::series::Model,
        entity::season::Model,
        entity::chapter::Model,
        entity::chapter_image::Model,
    ),
    DbErr,
> {
    let (series, season, chapter) = create_chapter_with_dependencies(db).await?;
    let image = crate::factory::chapter_image::create_chapter_image(db, chapter.id).await?;

    Ok((series, season, chapter, image))
}

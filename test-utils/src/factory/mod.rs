//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `*Factory` builder for
//! customization and a `create_*` shorthand for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let series = factory::create_series(&db).await?;
//! let season = factory::create_season(&db, series.id).await?;
//!
//! // Whole branch down to a page image
//! let (series, season, chapter, image) =
//!     factory::helpers::create_image_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let series = factory::series::SeriesFactory::new(&db)
//!     .title(MultilingualText::new("Custom", ""))
//!     .updated_at(Utc::now() - Duration::hours(1))
//!     .build()
//!     .await?;
//! ```

pub mod chapter;
pub mod chapter_image;
pub mod helpers;
pub mod season;
pub mod series;
pub mod tag;
pub mod text_layer;
pub mod translation;

pub use chapter::create_chapter;
pub use chapter_image::create_chapter_image;
pub use season::create_season;
pub use series::create_series;
pub use tag::create_tag;
pub use text_layer::create_text_layer;
pub use translation::create_translation;

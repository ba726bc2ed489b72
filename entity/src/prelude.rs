pub use super::chapter::Entity as Chapter;
pub use super::chapter_image::Entity as ChapterImage;
pub use super::season::Entity as Season;
pub use super::series::Entity as Series;
pub use super::series_tag::Entity as SeriesTag;
pub use super::tag::Entity as Tag;
pub use super::tag_translation::Entity as TagTranslation;
pub use super::text_layer::Entity as TextLayer;
pub use super::translation::Entity as Translation;

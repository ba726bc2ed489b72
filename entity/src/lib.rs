//! SeaORM entity models for the publishing schema.
//!
//! One module per table along the ownership tree
//! (series → season → chapter → chapter_image → text_layer → translation), the
//! shared tag catalog (`tag`, `tag_translation`, `series_tag`), and the value
//! types stored inside JSON columns.

pub mod prelude;

pub mod chapter;
pub mod chapter_image;
pub mod multilingual_text;
pub mod sea_orm_active_enums;
pub mod season;
pub mod series;
pub mod series_tag;
pub mod string_list;
pub mod tag;
pub mod tag_translation;
pub mod text_layer;
pub mod translation;

pub use multilingual_text::MultilingualText;
pub use string_list::StringList;

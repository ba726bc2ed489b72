//! Chapter image factory for creating test page images.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating page images within a chapter.
pub struct ChapterImageFactory<'a> {
    db: &'a DatabaseConnection,
    chapter_id: Uuid,
    image_url: String,
    display_order: i32,
}

impl<'a> ChapterImageFactory<'a> {
    /// Creates a new ChapterImageFactory with default values.
    ///
    /// Defaults:
    /// - image_url: `"https://cdn.example.com/pages/{id}.png"`
    /// - display_order: `1`
    pub fn new(db: &'a DatabaseConnection, chapter_id: Uuid) -> Self {
        Self {
            db,
            chapter_id,
            image_url: format!("https://cdn.example.com/pages/{}.png", next_id()),
            display_order: 1,
        }
    }

    /// Sets the image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the display order within the chapter.
    pub fn display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Builds and inserts the image entity into the database.
    pub async fn build(self) -> Result<entity::chapter_image::Model, DbErr> {
        entity::chapter_image::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            chapter_id: ActiveValue::Set(self.chapter_id),
            image_url: ActiveValue::Set(self.image_url),
            display_order: ActiveValue::Set(self.display_order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a page image with default values for the specified chapter.
pub async fn create_chapter_image(
    db: &DatabaseConnection,
    chapter_id: Uuid,
) -> Result<entity::chapter_image::Model, DbErr> {
    ChapterImageFactory::new(db, chapter_id).build().await
}

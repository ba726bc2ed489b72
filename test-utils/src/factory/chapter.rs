//! Chapter factory for creating test chapters.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChapterStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test chapters within a season.
pub struct ChapterFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: Uuid,
    chapter_number: i32,
    title: String,
    status: ChapterStatus,
    published_at: Option<DateTime<Utc>>,
}

impl<'a> ChapterFactory<'a> {
    /// Creates a new ChapterFactory with default values.
    ///
    /// Defaults:
    /// - chapter_number: `1`
    /// - title: `"Chapter {id}"`
    /// - status: `draft`
    /// - published_at: `None`
    pub fn new(db: &'a DatabaseConnection, season_id: Uuid) -> Self {
        Self {
            db,
            season_id,
            chapter_number: 1,
            title: format!("Chapter {}", next_id()),
            status: ChapterStatus::Draft,
            published_at: None,
        }
    }

    /// Sets the chapter number.
    pub fn chapter_number(mut self, chapter_number: i32) -> Self {
        self.chapter_number = chapter_number;
        self
    }

    /// Sets the chapter title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Marks the chapter as published at `published_at`.
    pub fn published(mut self, published_at: DateTime<Utc>) -> Self {
        self.status = ChapterStatus::Published;
        self.published_at = Some(published_at);
        self
    }

    /// Builds and inserts the chapter entity into the database.
    pub async fn build(self) -> Result<entity::chapter::Model, DbErr> {
        entity::chapter::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            season_id: ActiveValue::Set(self.season_id),
            chapter_number: ActiveValue::Set(self.chapter_number),
            title: ActiveValue::Set(self.title),
            status: ActiveValue::Set(self.status),
            published_at: ActiveValue::Set(self.published_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chapter with default values for the specified season.
pub async fn create_chapter(
    db: &DatabaseConnection,
    season_id: Uuid,
) -> Result<entity::chapter::Model, DbErr> {
    ChapterFactory::new(db, season_id).build().await
}

//! Series factory for creating test series entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::{
    sea_orm_active_enums::{SeriesStatus, Visibility},
    MultilingualText, StringList,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test series with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::series::SeriesFactory;
///
/// let series = SeriesFactory::new(&db)
///     .title(MultilingualText::new("Custom", "กำหนดเอง"))
///     .status(SeriesStatus::Published)
///     .build()
///     .await?;
/// ```
pub struct SeriesFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: Uuid,
    title: MultilingualText,
    description: MultilingualText,
    genres: Vec<String>,
    status: SeriesStatus,
    updated_at: DateTime<Utc>,
}

impl<'a> SeriesFactory<'a> {
    /// Creates a new SeriesFactory with default values.
    ///
    /// Defaults:
    /// - title: `{"en": "Series {id}"}` where id is auto-incremented
    /// - description: empty
    /// - genres: `["action"]`
    /// - status: `draft`
    /// - updated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id: Uuid::new_v4(),
            title: MultilingualText::new(format!("Series {}", id), ""),
            description: MultilingualText::default(),
            genres: vec!["action".to_string()],
            status: SeriesStatus::Draft,
            updated_at: Utc::now(),
        }
    }

    /// Sets the owning creator.
    pub fn creator_id(mut self, creator_id: Uuid) -> Self {
        self.creator_id = creator_id;
        self
    }

    /// Sets the series title.
    pub fn title(mut self, title: MultilingualText) -> Self {
        self.title = title;
        self
    }

    /// Sets the series description.
    pub fn description(mut self, description: MultilingualText) -> Self {
        self.description = description;
        self
    }

    /// Sets the genre list.
    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: SeriesStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the last-update timestamp used for listing order.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the series entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::series::Model)` - Created series entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::series::Model, DbErr> {
        entity::series::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            creator_id: ActiveValue::Set(self.creator_id),
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(MultilingualText::default()),
            description: ActiveValue::Set(self.description),
            author: ActiveValue::Set("Test Author".to_string()),
            genres: ActiveValue::Set(StringList(self.genres)),
            thumbnail_url: ActiveValue::Set(String::new()),
            cover_image_url: ActiveValue::Set(String::new()),
            banner_image_url: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            visibility: ActiveValue::Set(Visibility::Public),
            nsfw: ActiveValue::Set(false),
            schedule_publish_at: ActiveValue::Set(None),
            monetization_enabled: ActiveValue::Set(false),
            monetization_type: ActiveValue::Set(String::new()),
            default_unlock_type: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(self.updated_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a series with default values.
///
/// Shorthand for `SeriesFactory::new(db).build().await`.
pub async fn create_series(db: &DatabaseConnection) -> Result<entity::series::Model, DbErr> {
    SeriesFactory::new(db).build().await
}

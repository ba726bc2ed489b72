//! Tag factory for creating catalog tags with their translations.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

/// Factory for creating test tags.
///
/// Inserts the tag row followed by one translation row per configured
/// `(language, name)` pair.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    translations: Vec<(String, String)>,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"tag-{id}"`
    /// - translations: `[("en", "Tag {id}")]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("tag-{}", id),
            translations: vec![("en".to_string(), format!("Tag {}", id))],
        }
    }

    /// Sets the tag slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Adds a translation for `language`.
    pub fn translation(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.translations.push((language.into(), name.into()));
        self
    }

    /// Builds and inserts the tag and its translations.
    ///
    /// # Returns
    /// - `Ok(entity::tag::Model)` - Created tag entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        let now = Utc::now();
        let tag = entity::tag::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            slug: ActiveValue::Set(self.slug),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for (language, name) in self.translations {
            entity::tag_translation::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                tag_id: ActiveValue::Set(tag.id),
                language: ActiveValue::Set(language),
                name: ActiveValue::Set(name),
            }
            .insert(self.db)
            .await?;
        }

        Ok(tag)
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}

/// Links an existing tag to a series.
pub async fn attach_tag(
    db: &DatabaseConnection,
    series_id: Uuid,
    tag_id: Uuid,
) -> Result<entity::series_tag::Model, DbErr> {
    entity::prelude::SeriesTag::insert(entity::series_tag::ActiveModel {
        series_id: ActiveValue::Set(series_id),
        tag_id: ActiveValue::Set(tag_id),
    })
    .exec_with_returning(db)
    .await
}

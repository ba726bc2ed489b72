use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::series::{TagDto, TagTranslationDto};

/// Catalog label attachable to any number of series.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: Uuid,
    pub slug: String,
    pub translations: Vec<TagTranslation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display name of a tag in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct TagTranslation {
    pub id: Uuid,
    pub tag_id: Uuid,
    pub language: String,
    pub name: String,
}

impl Tag {
    /// Converts a tag entity without translations.
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            translations: Vec::new(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            slug: self.slug,
            translations: self
                .translations
                .into_iter()
                .map(TagTranslation::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl TagTranslation {
    pub fn from_entity(entity: entity::tag_translation::Model) -> Self {
        Self {
            id: entity.id,
            tag_id: entity.tag_id,
            language: entity.language,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TagTranslationDto {
        TagTranslationDto {
            id: self.id,
            tag_id: self.tag_id,
            language: self.language,
            name: self.name,
        }
    }
}

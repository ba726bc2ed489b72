use chrono::{DateTime, Utc};
use entity::{
    sea_orm_active_enums::{SeriesStatus, Visibility},
    MultilingualText,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::chapter::ChapterDto;

/// Payload for creating a series.
///
/// Every field falls back to an empty or default value when omitted; a missing
/// `title.en` is rejected by the service rather than by deserialization.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSeriesDto {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub title: MultilingualText,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub subtitle: MultilingualText,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub description: MultilingualText,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub tags: Vec<MultilingualText>,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub cover_image_url: String,
    #[serde(default)]
    pub banner_image_url: String,
    #[serde(default)]
    #[schema(value_type = String)]
    pub status: SeriesStatus,
    #[serde(default)]
    #[schema(value_type = String)]
    pub visibility: Visibility,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub schedule_publish_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub monetization_enabled: bool,
    #[serde(default)]
    pub monetization_type: String,
    #[serde(default)]
    pub default_unlock_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeriesDto {
    pub id: Uuid,
    pub creator_id: Uuid,
    #[schema(value_type = Object)]
    pub title: MultilingualText,
    #[schema(value_type = Object)]
    pub subtitle: MultilingualText,
    #[schema(value_type = Object)]
    pub description: MultilingualText,
    pub author: String,
    pub genres: Vec<String>,
    pub tags: Vec<TagDto>,
    pub thumbnail_url: String,
    pub cover_image_url: String,
    pub banner_image_url: String,
    #[schema(value_type = String)]
    pub status: SeriesStatus,
    #[schema(value_type = String)]
    pub visibility: Visibility,
    pub nsfw: bool,
    pub schedule_publish_at: Option<DateTime<Utc>>,
    pub monetization_enabled: bool,
    pub monetization_type: String,
    pub default_unlock_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<SeasonDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagDto {
    pub id: Uuid,
    pub slug: String,
    pub translations: Vec<TagTranslationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagTranslationDto {
    pub id: Uuid,
    pub tag_id: Uuid,
    pub language: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSeasonDto {
    pub season_number: i32,
    #[serde(default)]
    pub title: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeasonDto {
    pub id: Uuid,
    pub series_id: Uuid,
    pub season_number: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chapters: Vec<ChapterDto>,
}

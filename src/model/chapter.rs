use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChapterStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::layer::TextLayerDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateChapterDto {
    pub chapter_number: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    #[schema(value_type = String)]
    pub status: ChapterStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChapterDto {
    pub id: Uuid,
    pub season_id: Uuid,
    pub chapter_number: i32,
    pub title: String,
    #[schema(value_type = String)]
    pub status: ChapterStatus,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ChapterImageDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateChapterImageDto {
    pub image_url: String,
    pub order: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChapterImageDto {
    pub id: Uuid,
    pub chapter_id: Uuid,
    pub image_url: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_layers: Vec<TextLayerDto>,
}

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChapterStatus;
use uuid::Uuid;

use crate::{
    model::chapter::{ChapterDto, ChapterImageDto, CreateChapterDto, CreateChapterImageDto},
    server::model::layer::TextLayer,
};

/// Ordered subdivision of a season holding page images.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: Uuid,
    pub season_id: Uuid,
    pub chapter_number: i32,
    pub title: String,
    pub status: ChapterStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub images: Vec<ChapterImage>,
}

impl Chapter {
    pub fn from_entity(entity: entity::chapter::Model) -> Self {
        Self {
            id: entity.id,
            season_id: entity.season_id,
            chapter_number: entity.chapter_number,
            title: entity.title,
            status: entity.status,
            published_at: entity.published_at,
            images: Vec::new(),
        }
    }

    pub fn into_dto(self) -> ChapterDto {
        ChapterDto {
            id: self.id,
            season_id: self.season_id,
            chapter_number: self.chapter_number,
            title: self.title,
            status: self.status,
            published_at: self.published_at,
            images: self.images.into_iter().map(ChapterImage::into_dto).collect(),
        }
    }
}

/// One page image of a chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterImage {
    pub id: Uuid,
    pub chapter_id: Uuid,
    pub image_url: String,
    pub display_order: i32,
    pub text_layers: Vec<TextLayer>,
}

impl ChapterImage {
    pub fn from_entity(entity: entity::chapter_image::Model) -> Self {
        Self {
            id: entity.id,
            chapter_id: entity.chapter_id,
            image_url: entity.image_url,
            display_order: entity.display_order,
            text_layers: Vec::new(),
        }
    }

    pub fn into_dto(self) -> ChapterImageDto {
        ChapterImageDto {
            id: self.id,
            chapter_id: self.chapter_id,
            image_url: self.image_url,
            order: self.display_order,
            text_layers: self
                .text_layers
                .into_iter()
                .map(TextLayer::into_dto)
                .collect(),
        }
    }
}

/// Parameters for adding a chapter to a season.
#[derive(Debug, Clone)]
pub struct CreateChapterParams {
    pub season_id: Uuid,
    pub chapter_number: i32,
    pub title: String,
    pub status: ChapterStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateChapterParams {
    pub fn from_dto(season_id: Uuid, dto: CreateChapterDto) -> Self {
        Self {
            season_id,
            chapter_number: dto.chapter_number,
            title: dto.title,
            status: dto.status,
            published_at: dto.published_at,
        }
    }
}

/// Parameters for registering an uploaded page image on a chapter.
#[derive(Debug, Clone)]
pub struct CreateChapterImageParams {
    pub chapter_id: Uuid,
    pub image_url: String,
    pub display_order: i32,
}

impl CreateChapterImageParams {
    pub fn from_dto(chapter_id: Uuid, dto: CreateChapterImageDto) -> Self {
        Self {
            chapter_id,
            image_url: dto.image_url,
            display_order: dto.order,
        }
    }
}

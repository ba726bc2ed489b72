use chrono::{DateTime, Utc};
use entity::{
    sea_orm_active_enums::{SeriesStatus, Visibility},
    MultilingualText,
};
use uuid::Uuid;

use crate::{
    model::series::{CreateSeasonDto, CreateSeriesDto, SeasonDto, SeriesDto},
    server::model::{chapter::Chapter, tag::Tag},
};

/// Root content entity with its tags and, depending on fetch depth, its
/// season and chapter index.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: MultilingualText,
    pub subtitle: MultilingualText,
    pub description: MultilingualText,
    pub author: String,
    pub genres: Vec<String>,
    pub tags: Vec<Tag>,
    pub thumbnail_url: String,
    pub cover_image_url: String,
    pub banner_image_url: String,
    pub status: SeriesStatus,
    pub visibility: Visibility,
    pub nsfw: bool,
    pub schedule_publish_at: Option<DateTime<Utc>>,
    pub monetization_enabled: bool,
    pub monetization_type: String,
    pub default_unlock_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub seasons: Vec<Season>,
}

impl Series {
    /// Converts a series entity with no tags or seasons attached.
    pub fn from_entity(entity: entity::series::Model) -> Self {
        Self {
            id: entity.id,
            creator_id: entity.creator_id,
            title: entity.title,
            subtitle: entity.subtitle,
            description: entity.description,
            author: entity.author,
            genres: entity.genres.into(),
            tags: Vec::new(),
            thumbnail_url: entity.thumbnail_url,
            cover_image_url: entity.cover_image_url,
            banner_image_url: entity.banner_image_url,
            status: entity.status,
            visibility: entity.visibility,
            nsfw: entity.nsfw,
            schedule_publish_at: entity.schedule_publish_at,
            monetization_enabled: entity.monetization_enabled,
            monetization_type: entity.monetization_type,
            default_unlock_type: entity.default_unlock_type,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            seasons: Vec::new(),
        }
    }

    pub fn into_dto(self) -> SeriesDto {
        SeriesDto {
            id: self.id,
            creator_id: self.creator_id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            author: self.author,
            genres: self.genres,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
            thumbnail_url: self.thumbnail_url,
            cover_image_url: self.cover_image_url,
            banner_image_url: self.banner_image_url,
            status: self.status,
            visibility: self.visibility,
            nsfw: self.nsfw,
            schedule_publish_at: self.schedule_publish_at,
            monetization_enabled: self.monetization_enabled,
            monetization_type: self.monetization_type,
            default_unlock_type: self.default_unlock_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
            seasons: self.seasons.into_iter().map(Season::into_dto).collect(),
        }
    }
}

/// Ordered subdivision of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: Uuid,
    pub series_id: Uuid,
    pub season_number: i32,
    pub title: String,
    pub chapters: Vec<Chapter>,
}

impl Season {
    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            series_id: entity.series_id,
            season_number: entity.season_number,
            title: entity.title,
            chapters: Vec::new(),
        }
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            series_id: self.series_id,
            season_number: self.season_number,
            title: self.title,
            chapters: self.chapters.into_iter().map(Chapter::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new series.
#[derive(Debug, Clone)]
pub struct CreateSeriesParams {
    pub creator_id: Uuid,
    pub title: MultilingualText,
    pub subtitle: MultilingualText,
    pub description: MultilingualText,
    pub author: String,
    pub genres: Vec<String>,
    pub tags: Vec<MultilingualText>,
    pub thumbnail_url: String,
    pub cover_image_url: String,
    pub banner_image_url: String,
    pub status: SeriesStatus,
    pub visibility: Visibility,
    pub nsfw: bool,
    pub schedule_publish_at: Option<DateTime<Utc>>,
    pub monetization_enabled: bool,
    pub monetization_type: String,
    pub default_unlock_type: String,
}

impl CreateSeriesParams {
    /// Converts the creation payload, attributing the series to `creator_id`.
    pub fn from_dto(creator_id: Uuid, dto: CreateSeriesDto) -> Self {
        Self {
            creator_id,
            title: dto.title,
            subtitle: dto.subtitle,
            description: dto.description,
            author: dto.author,
            genres: dto.genres,
            tags: dto.tags,
            thumbnail_url: dto.thumbnail_url,
            cover_image_url: dto.cover_image_url,
            banner_image_url: dto.banner_image_url,
            status: dto.status,
            visibility: dto.visibility,
            nsfw: dto.nsfw,
            schedule_publish_at: dto.schedule_publish_at,
            monetization_enabled: dto.monetization_enabled,
            monetization_type: dto.monetization_type,
            default_unlock_type: dto.default_unlock_type,
        }
    }
}

/// Parameters for adding a season to a series.
#[derive(Debug, Clone)]
pub struct CreateSeasonParams {
    pub series_id: Uuid,
    pub season_number: i32,
    pub title: String,
}

impl CreateSeasonParams {
    pub fn from_dto(series_id: Uuid, dto: CreateSeasonDto) -> Self {
        Self {
            series_id,
            season_number: dto.season_number,
            title: dto.title,
        }
    }
}

use crate::server::{
    data::{comic::ComicRepositoryImpl, ComicRepository, LIST_SERIES_LIMIT},
    model::{
        chapter::{Chapter, ChapterImage},
        series::{Season, Series},
        tag::{Tag, TagTranslation},
    },
};
use chrono::{Duration, Utc};
use entity::{
    sea_orm_active_enums::{ChapterStatus, SeriesStatus, Visibility},
    MultilingualText,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create_chapter;
mod create_chapter_image;
mod create_season;
mod create_series;
mod get_chapter_by_id;
mod get_series_by_id;
mod list_series;

/// Builds an unsaved series with one tag per English label.
fn new_series(title: &str, tags: &[&str]) -> Series {
    let now = Utc::now();
    Series {
        id: Uuid::new_v4(),
        creator_id: Uuid::new_v4(),
        title: MultilingualText::new(title, ""),
        subtitle: MultilingualText::default(),
        description: MultilingualText::new("desc", ""),
        author: "Author".to_string(),
        genres: vec!["action".to_string(), "drama".to_string()],
        tags: tags
            .iter()
            .map(|label| {
                let tag_id = Uuid::new_v4();
                Tag {
                    id: tag_id,
                    slug: label.to_string(),
                    translations: vec![
                        TagTranslation {
                            id: Uuid::new_v4(),
                            tag_id,
                            language: "en".to_string(),
                            name: label.to_string(),
                        },
                        TagTranslation {
                            id: Uuid::new_v4(),
                            tag_id,
                            language: "th".to_string(),
                            name: String::new(),
                        },
                    ],
                    created_at: now,
                    updated_at: now,
                }
            })
            .collect(),
        thumbnail_url: String::new(),
        cover_image_url: String::new(),
        banner_image_url: String::new(),
        status: SeriesStatus::Draft,
        visibility: Visibility::Public,
        nsfw: false,
        schedule_publish_at: None,
        monetization_enabled: false,
        monetization_type: String::new(),
        default_unlock_type: String::new(),
        created_at: now,
        updated_at: now,
        seasons: Vec::new(),
    }
}

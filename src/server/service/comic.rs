use chrono::Utc;
use uuid::Uuid;

use crate::server::{
    data::ComicRepository,
    error::AppError,
    model::{
        chapter::{Chapter, ChapterImage, CreateChapterImageParams, CreateChapterParams},
        series::{CreateSeasonParams, CreateSeriesParams, Season, Series},
    },
    service::tag::TagCatalog,
};

pub struct ComicService<R> {
    repo: R,
}

impl<R: ComicRepository> ComicService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a series with freshly minted tags.
    ///
    /// # Returns
    /// - `Ok(Series)` - The stored series with its tags
    /// - `Err(AppError::Validation)` - English title is empty
    /// - `Err(AppError::DbErr)` - Storage failure; nothing is persisted
    pub async fn create_series(&self, params: CreateSeriesParams) -> Result<Series, AppError> {
        if params.title.en.is_empty() {
            return Err(AppError::Validation(
                "English title is required".to_string(),
            ));
        }

        let now = Utc::now();
        let series = Series {
            id: Uuid::new_v4(),
            creator_id: params.creator_id,
            title: params.title,
            subtitle: params.subtitle,
            description: params.description,
            author: params.author,
            genres: params.genres,
            tags: TagCatalog::synthesize(&params.tags, now),
            thumbnail_url: params.thumbnail_url,
            cover_image_url: params.cover_image_url,
            banner_image_url: params.banner_image_url,
            status: params.status,
            visibility: params.visibility,
            nsfw: params.nsfw,
            schedule_publish_at: params.schedule_publish_at,
            monetization_enabled: params.monetization_enabled,
            monetization_type: params.monetization_type,
            default_unlock_type: params.default_unlock_type,
            created_at: now,
            updated_at: now,
            seasons: Vec::new(),
        };

        let series = self.repo.create_series(series).await?;
        tracing::info!(series_id = %series.id, creator_id = %series.creator_id, "Created series");

        Ok(series)
    }

    /// Gets a series with its tags, seasons and chapters.
    pub async fn get_series(&self, id: Uuid) -> Result<Series, AppError> {
        self.repo
            .get_series_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Series not found".to_string()))
    }

    /// Gets a chapter with images, text layers and translations.
    pub async fn get_chapter(&self, id: Uuid) -> Result<Chapter, AppError> {
        self.repo
            .get_chapter_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))
    }

    pub async fn list_series(&self) -> Result<Vec<Series>, AppError> {
        Ok(self.repo.list_series().await?)
    }

    pub async fn create_season(&self, params: CreateSeasonParams) -> Result<Season, AppError> {
        let season = self
            .repo
            .create_season(Season {
                id: Uuid::new_v4(),
                series_id: params.series_id,
                season_number: params.season_number,
                title: params.title,
                chapters: Vec::new(),
            })
            .await?;

        Ok(season)
    }

    pub async fn create_chapter(&self, params: CreateChapterParams) -> Result<Chapter, AppError> {
        let chapter = self
            .repo
            .create_chapter(Chapter {
                id: Uuid::new_v4(),
                season_id: params.season_id,
                chapter_number: params.chapter_number,
                title: params.title,
                status: params.status,
                published_at: params.published_at,
                images: Vec::new(),
            })
            .await?;

        Ok(chapter)
    }

    /// Registers an already-uploaded page image on a chapter.
    pub async fn add_chapter_image(
        &self,
        params: CreateChapterImageParams,
    ) -> Result<ChapterImage, AppError> {
        let image = self
            .repo
            .create_chapter_image(ChapterImage {
                id: Uuid::new_v4(),
                chapter_id: params.chapter_id,
                image_url: params.image_url,
                display_order: params.display_order,
                text_layers: Vec::new(),
            })
            .await?;

        Ok(image)
    }
}

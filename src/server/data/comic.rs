use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::{layer::load_layers_for_images, ComicRepository, LIST_SERIES_LIMIT},
    model::{
        chapter::{Chapter, ChapterImage},
        series::{Season, Series},
        tag::{Tag, TagTranslation},
    },
};

pub struct ComicRepositoryImpl<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComicRepositoryImpl<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the tags linked to a series, each with its translations.
    async fn load_tags(&self, series: &entity::series::Model) -> Result<Vec<Tag>, DbErr> {
        let tags = series.find_related(entity::prelude::Tag).all(self.db).await?;
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let tag_ids: Vec<Uuid> = tags.iter().map(|t| t.id).collect();
        let mut translations: HashMap<Uuid, Vec<TagTranslation>> = HashMap::new();
        for translation in entity::prelude::TagTranslation::find()
            .filter(entity::tag_translation::Column::TagId.is_in(tag_ids))
            .all(self.db)
            .await?
        {
            translations
                .entry(translation.tag_id)
                .or_default()
                .push(TagTranslation::from_entity(translation));
        }

        Ok(tags
            .into_iter()
            .map(|model| {
                let mut tag = Tag::from_entity(model);
                tag.translations = translations.remove(&tag.id).unwrap_or_default();
                tag
            })
            .collect())
    }

    /// Loads seasons ordered by number, each with chapters ordered by number.
    async fn load_seasons(&self, series_id: Uuid) -> Result<Vec<Season>, DbErr> {
        let seasons = entity::prelude::Season::find()
            .filter(entity::season::Column::SeriesId.eq(series_id))
            .order_by_asc(entity::season::Column::SeasonNumber)
            .all(self.db)
            .await?;
        if seasons.is_empty() {
            return Ok(Vec::new());
        }

        let season_ids: Vec<Uuid> = seasons.iter().map(|s| s.id).collect();
        let mut chapters: HashMap<Uuid, Vec<Chapter>> = HashMap::new();
        for chapter in entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::SeasonId.is_in(season_ids))
            .order_by_asc(entity::chapter::Column::ChapterNumber)
            .all(self.db)
            .await?
        {
            chapters
                .entry(chapter.season_id)
                .or_default()
                .push(Chapter::from_entity(chapter));
        }

        Ok(seasons
            .into_iter()
            .map(|model| {
                let mut season = Season::from_entity(model);
                season.chapters = chapters.remove(&season.id).unwrap_or_default();
                season
            })
            .collect())
    }
}

#[async_trait]
impl ComicRepository for ComicRepositoryImpl<'_> {
    /// Inserts the series row, every tag with its translations, and the
    /// series↔tag links inside one transaction.
    ///
    /// # Returns
    /// - `Ok(Series)`: The stored series
    /// - `Err(DbErr)`: Database error; nothing is persisted
    async fn create_series(&self, series: Series) -> Result<Series, DbErr> {
        let txn = self.db.begin().await?;

        entity::series::ActiveModel {
            id: ActiveValue::Set(series.id),
            creator_id: ActiveValue::Set(series.creator_id),
            title: ActiveValue::Set(series.title.clone()),
            subtitle: ActiveValue::Set(series.subtitle.clone()),
            description: ActiveValue::Set(series.description.clone()),
            author: ActiveValue::Set(series.author.clone()),
            genres: ActiveValue::Set(series.genres.clone().into()),
            thumbnail_url: ActiveValue::Set(series.thumbnail_url.clone()),
            cover_image_url: ActiveValue::Set(series.cover_image_url.clone()),
            banner_image_url: ActiveValue::Set(series.banner_image_url.clone()),
            status: ActiveValue::Set(series.status),
            visibility: ActiveValue::Set(series.visibility),
            nsfw: ActiveValue::Set(series.nsfw),
            schedule_publish_at: ActiveValue::Set(series.schedule_publish_at),
            monetization_enabled: ActiveValue::Set(series.monetization_enabled),
            monetization_type: ActiveValue::Set(series.monetization_type.clone()),
            default_unlock_type: ActiveValue::Set(series.default_unlock_type.clone()),
            created_at: ActiveValue::Set(series.created_at),
            updated_at: ActiveValue::Set(series.updated_at),
        }
        .insert(&txn)
        .await?;

        for tag in &series.tags {
            entity::tag::ActiveModel {
                id: ActiveValue::Set(tag.id),
                slug: ActiveValue::Set(tag.slug.clone()),
                created_at: ActiveValue::Set(tag.created_at),
                updated_at: ActiveValue::Set(tag.updated_at),
            }
            .insert(&txn)
            .await?;

            for translation in &tag.translations {
                entity::tag_translation::ActiveModel {
                    id: ActiveValue::Set(translation.id),
                    tag_id: ActiveValue::Set(translation.tag_id),
                    language: ActiveValue::Set(translation.language.clone()),
                    name: ActiveValue::Set(translation.name.clone()),
                }
                .insert(&txn)
                .await?;
            }

            entity::prelude::SeriesTag::insert(entity::series_tag::ActiveModel {
                series_id: ActiveValue::Set(series.id),
                tag_id: ActiveValue::Set(tag.id),
            })
            .exec_with_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(series)
    }

    async fn get_series_by_id(&self, id: Uuid) -> Result<Option<Series>, DbErr> {
        let Some(model) = entity::prelude::Series::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tags = self.load_tags(&model).await?;
        let seasons = self.load_seasons(id).await?;

        let mut series = Series::from_entity(model);
        series.tags = tags;
        series.seasons = seasons;

        Ok(Some(series))
    }

    async fn get_chapter_by_id(&self, id: Uuid) -> Result<Option<Chapter>, DbErr> {
        let Some(model) = entity::prelude::Chapter::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let images = entity::prelude::ChapterImage::find()
            .filter(entity::chapter_image::Column::ChapterId.eq(id))
            .order_by_asc(entity::chapter_image::Column::DisplayOrder)
            .all(self.db)
            .await?;

        let image_ids: Vec<Uuid> = images.iter().map(|i| i.id).collect();
        let mut layers = HashMap::new();
        for layer in load_layers_for_images(self.db, image_ids).await? {
            layers
                .entry(layer.chapter_image_id)
                .or_insert_with(Vec::new)
                .push(layer);
        }

        let mut chapter = Chapter::from_entity(model);
        chapter.images = images
            .into_iter()
            .map(|model| {
                let mut image = ChapterImage::from_entity(model);
                image.text_layers = layers.remove(&image.id).unwrap_or_default();
                image
            })
            .collect();

        Ok(Some(chapter))
    }

    async fn list_series(&self) -> Result<Vec<Series>, DbErr> {
        let series = entity::prelude::Series::find()
            .order_by_desc(entity::series::Column::UpdatedAt)
            .limit(LIST_SERIES_LIMIT)
            .all(self.db)
            .await?;

        Ok(series.into_iter().map(Series::from_entity).collect())
    }

    async fn create_season(&self, season: Season) -> Result<Season, DbErr> {
        let model = entity::season::ActiveModel {
            id: ActiveValue::Set(season.id),
            series_id: ActiveValue::Set(season.series_id),
            season_number: ActiveValue::Set(season.season_number),
            title: ActiveValue::Set(season.title),
        }
        .insert(self.db)
        .await?;

        Ok(Season::from_entity(model))
    }

    async fn create_chapter(&self, chapter: Chapter) -> Result<Chapter, DbErr> {
        let model = entity::chapter::ActiveModel {
            id: ActiveValue::Set(chapter.id),
            season_id: ActiveValue::Set(chapter.season_id),
            chapter_number: ActiveValue::Set(chapter.chapter_number),
            title: ActiveValue::Set(chapter.title),
            status: ActiveValue::Set(chapter.status),
            published_at: ActiveValue::Set(chapter.published_at),
        }
        .insert(self.db)
        .await?;

        Ok(Chapter::from_entity(model))
    }

    async fn create_chapter_image(&self, image: ChapterImage) -> Result<ChapterImage, DbErr> {
        let model = entity::chapter_image::ActiveModel {
            id: ActiveValue::Set(image.id),
            chapter_id: ActiveValue::Set(image.chapter_id),
            image_url: ActiveValue::Set(image.image_url),
            display_order: ActiveValue::Set(image.display_order),
        }
        .insert(self.db)
        .await?;

        Ok(ChapterImage::from_entity(model))
    }
}

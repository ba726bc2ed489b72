//! In-memory repository used by service and controller-free unit tests.
//!
//! Clones share the same store. Parent references are checked on insert so
//! that dangling identities fail the same way a foreign key would.

use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::server::{
    data::{ComicRepository, LayerRepository, LIST_SERIES_LIMIT},
    model::{
        chapter::{Chapter, ChapterImage},
        layer::{TextLayer, Translation},
        series::{Season, Series},
    },
};

#[derive(Default)]
struct Store {
    series: Vec<Series>,
    seasons: Vec<Season>,
    chapters: Vec<Chapter>,
    images: Vec<ChapterImage>,
    layers: Vec<TextLayer>,
    translations: Vec<Translation>,
    /// Makes every write fail, mimicking a lost connection.
    unavailable: bool,
}

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<Mutex<Store>>,
}

fn foreign_key_violation(table: &str, id: Uuid) -> DbErr {
    DbErr::Custom(format!(
        "FOREIGN KEY constraint failed: {} {} does not exist",
        table, id
    ))
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent writes fail with a connection error.
    pub fn set_unavailable(&self) {
        self.store.lock().unwrap().unavailable = true;
    }

    pub fn series_count(&self) -> usize {
        self.store.lock().unwrap().series.len()
    }

    pub fn translation_count(&self) -> usize {
        self.store.lock().unwrap().translations.len()
    }

    fn check_available(store: &Store) -> Result<(), DbErr> {
        if store.unavailable {
            return Err(DbErr::Conn(sea_orm::RuntimeErr::Internal(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ComicRepository for InMemoryRepository {
    async fn create_series(&self, series: Series) -> Result<Series, DbErr> {
        let mut store = self.store.lock().unwrap();
        Self::check_available(&store)?;
        store.series.push(series.clone());
        Ok(series)
    }

    async fn get_series_by_id(&self, id: Uuid) -> Result<Option<Series>, DbErr> {
        let store = self.store.lock().unwrap();
        let Some(series) = store.series.iter().find(|s| s.id == id) else {
            return Ok(None);
        };

        let mut series = series.clone();
        let mut seasons: Vec<Season> = store
            .seasons
            .iter()
            .filter(|s| s.series_id == id)
            .cloned()
            .collect();
        seasons.sort_by_key(|s| s.season_number);
        for season in &mut seasons {
            let mut chapters: Vec<Chapter> = store
                .chapters
                .iter()
                .filter(|c| c.season_id == season.id)
                .cloned()
                .collect();
            chapters.sort_by_key(|c| c.chapter_number);
            season.chapters = chapters;
        }
        series.seasons = seasons;

        Ok(Some(series))
    }

    async fn get_chapter_by_id(&self, id: Uuid) -> Result<Option<Chapter>, DbErr> {
        let store = self.store.lock().unwrap();
        let Some(chapter) = store.chapters.iter().find(|c| c.id == id) else {
            return Ok(None);
        };

        let mut chapter = chapter.clone();
        let mut images: Vec<ChapterImage> = store
            .images
            .iter()
            .filter(|i| i.chapter_id == id)
            .cloned()
            .collect();
        images.sort_by_key(|i| i.display_order);
        for image in &mut images {
            image.text_layers = store
                .layers
                .iter()
                .filter(|l| l.chapter_image_id == image.id)
                .map(|l| {
                    let mut layer = l.clone();
                    layer.translations = store
                        .translations
                        .iter()
                        .filter(|t| t.text_layer_id == l.id)
                        .cloned()
                        .collect();
                    layer
                })
                .collect();
        }
        chapter.images = images;

        Ok(Some(chapter))
    }

    async fn list_series(&self) -> Result<Vec<Series>, DbErr> {
        let store = self.store.lock().unwrap();
        let mut series = store.series.clone();
        series.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        series.truncate(LIST_SERIES_LIMIT as usize);
        for s in &mut series {
            s.tags.clear();
        }
        Ok(series)
    }

    async fn create_season(&self, season: Season) -> Result<Season, DbErr> {
        let mut store = self.store.lock().unwrap();
        Self::check_available(&store)?;
        if !store.series.iter().any(|s| s.id == season.series_id) {
            return Err(foreign_key_violation("series", season.series_id));
        }
        store.seasons.push(season.clone());
        Ok(season)
    }

    async fn create_chapter(&self, chapter: Chapter) -> Result<Chapter, DbErr> {
        let mut store = self.store.lock().unwrap();
        Self::check_available(&store)?;
        if !store.seasons.iter().any(|s| s.id == chapter.season_id) {
            return Err(foreign_key_violation("season", chapter.season_id));
        }
        store.chapters.push(chapter.clone());
        Ok(chapter)
    }

    async fn create_chapter_image(&self, image: ChapterImage) -> Result<ChapterImage, DbErr> {
        let mut store = self.store.lock().unwrap();
        Self::check_available(&store)?;
        if !store.chapters.iter().any(|c| c.id == image.chapter_id) {
            return Err(foreign_key_violation("chapter", image.chapter_id));
        }
        store.images.push(image.clone());
        Ok(image)
    }
}

#[async_trait]
impl LayerRepository for InMemoryRepository {
    async fn create_layer(&self, layer: TextLayer) -> Result<TextLayer, DbErr> {
        let mut store = self.store.lock().unwrap();
        Self::check_available(&store)?;
        if !store.images.iter().any(|i| i.id == layer.chapter_image_id) {
            return Err(foreign_key_violation("chapter_image", layer.chapter_image_id));
        }
        store.layers.push(layer.clone());
        Ok(layer)
    }

    async fn get_layers_by_image_id(&self, image_id: Uuid) -> Result<Vec<TextLayer>, DbErr> {
        let store = self.store.lock().unwrap();
        Ok(store
            .layers
            .iter()
            .filter(|l| l.chapter_image_id == image_id)
            .map(|l| {
                let mut layer = l.clone();
                layer.translations = store
                    .translations
                    .iter()
                    .filter(|t| t.text_layer_id == l.id)
                    .cloned()
                    .collect();
                layer
            })
            .collect())
    }

    async fn find_layer(&self, id: Uuid) -> Result<Option<TextLayer>, DbErr> {
        let store = self.store.lock().unwrap();
        Ok(store.layers.iter().find(|l| l.id == id).cloned())
    }

    async fn create_translation(&self, translation: Translation) -> Result<Translation, DbErr> {
        let mut store = self.store.lock().unwrap();
        Self::check_available(&store)?;
        if !store.layers.iter().any(|l| l.id == translation.text_layer_id) {
            return Err(foreign_key_violation("text_layer", translation.text_layer_id));
        }
        store.translations.push(translation.clone());
        Ok(translation)
    }
}

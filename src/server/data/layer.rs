use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::LayerRepository,
    model::layer::{TextLayer, Translation},
};

pub struct LayerRepositoryImpl<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LayerRepositoryImpl<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Loads every text layer placed on any of `image_ids`, each with its translations.
pub(super) async fn load_layers_for_images<C: ConnectionTrait>(
    db: &C,
    image_ids: Vec<Uuid>,
) -> Result<Vec<TextLayer>, DbErr> {
    if image_ids.is_empty() {
        return Ok(Vec::new());
    }

    let layers = entity::prelude::TextLayer::find()
        .filter(entity::text_layer::Column::ChapterImageId.is_in(image_ids))
        .all(db)
        .await?;
    if layers.is_empty() {
        return Ok(Vec::new());
    }

    let layer_ids: Vec<Uuid> = layers.iter().map(|l| l.id).collect();
    let mut translations: HashMap<Uuid, Vec<Translation>> = HashMap::new();
    for translation in entity::prelude::Translation::find()
        .filter(entity::translation::Column::TextLayerId.is_in(layer_ids))
        .all(db)
        .await?
    {
        translations
            .entry(translation.text_layer_id)
            .or_default()
            .push(Translation::from_entity(translation));
    }

    Ok(layers
        .into_iter()
        .map(|model| {
            let mut layer = TextLayer::from_entity(model);
            layer.translations = translations.remove(&layer.id).unwrap_or_default();
            layer
        })
        .collect())
}

#[async_trait]
impl LayerRepository for LayerRepositoryImpl<'_> {
    /// Inserts a new text layer.
    ///
    /// The image reference is only checked by the foreign key constraint.
    ///
    /// # Returns
    /// - `Ok(TextLayer)`: The stored layer, without translations
    /// - `Err(DbErr)`: Database error, including an unknown image
    async fn create_layer(&self, layer: TextLayer) -> Result<TextLayer, DbErr> {
        let model = entity::text_layer::ActiveModel {
            id: ActiveValue::Set(layer.id),
            chapter_image_id: ActiveValue::Set(layer.chapter_image_id),
            original_text: ActiveValue::Set(layer.original_text),
            position_x: ActiveValue::Set(layer.position_x),
            position_y: ActiveValue::Set(layer.position_y),
            width: ActiveValue::Set(layer.width),
            height: ActiveValue::Set(layer.height),
            style_json: ActiveValue::Set(layer.style_json),
            layer_type: ActiveValue::Set(layer.layer_type),
        }
        .insert(self.db)
        .await?;

        Ok(TextLayer::from_entity(model))
    }

    async fn get_layers_by_image_id(&self, image_id: Uuid) -> Result<Vec<TextLayer>, DbErr> {
        load_layers_for_images(self.db, vec![image_id]).await
    }

    async fn find_layer(&self, id: Uuid) -> Result<Option<TextLayer>, DbErr> {
        let layer = entity::prelude::TextLayer::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(layer.map(TextLayer::from_entity))
    }

    /// Appends a translation row. Existing rows for the same language are kept.
    async fn create_translation(&self, translation: Translation) -> Result<Translation, DbErr> {
        let model = entity::translation::ActiveModel {
            id: ActiveValue::Set(translation.id),
            text_layer_id: ActiveValue::Set(translation.text_layer_id),
            language_code: ActiveValue::Set(translation.language_code),
            translated_text: ActiveValue::Set(translation.translated_text),
            is_machine_translated: ActiveValue::Set(translation.is_machine_translated),
            verified: ActiveValue::Set(translation.verified),
        }
        .insert(self.db)
        .await?;

        Ok(Translation::from_entity(model))
    }
}

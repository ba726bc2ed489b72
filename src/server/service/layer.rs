use std::sync::Arc;
use uuid::Uuid;

use crate::server::{
    data::LayerRepository,
    error::AppError,
    model::layer::{CreateTextLayerParams, TextLayer, Translation},
    service::translator::Translator,
};

pub struct LayerService<R> {
    repo: R,
    translator: Arc<dyn Translator>,
}

impl<R: LayerRepository> LayerService<R> {
    pub fn new(repo: R, translator: Arc<dyn Translator>) -> Self {
        Self { repo, translator }
    }

    /// Places a new text layer on a page image.
    ///
    /// The image is not looked up first; an unknown image fails on insert.
    pub async fn add_layer(&self, params: CreateTextLayerParams) -> Result<TextLayer, AppError> {
        let layer = self
            .repo
            .create_layer(TextLayer {
                id: Uuid::new_v4(),
                chapter_image_id: params.chapter_image_id,
                original_text: params.original_text,
                position_x: params.position_x,
                position_y: params.position_y,
                width: params.width,
                height: params.height,
                style_json: params.style_json,
                layer_type: params.layer_type,
                translations: Vec::new(),
            })
            .await?;

        Ok(layer)
    }

    /// Machine-translates a layer into `target_language` and stores a new row.
    ///
    /// An unknown layer is not reported as not found: the translator receives
    /// empty source text and the insert then fails on the layer reference.
    ///
    /// # Returns
    /// - `Ok(Translation)` - New unverified machine translation
    /// - `Err(AppError::TranslationErr)` - Provider failure
    /// - `Err(AppError::DbErr)` - Storage failure, including an unknown layer
    pub async fn translate_layer(
        &self,
        layer_id: Uuid,
        target_language: &str,
    ) -> Result<Translation, AppError> {
        let source_text = self
            .repo
            .find_layer(layer_id)
            .await?
            .map(|layer| layer.original_text)
            .unwrap_or_default();

        let translated_text = self
            .translator
            .translate(&source_text, target_language)
            .await?;

        let translation = self
            .repo
            .create_translation(Translation {
                id: Uuid::new_v4(),
                text_layer_id: layer_id,
                language_code: target_language.to_string(),
                translated_text,
                is_machine_translated: true,
                verified: false,
            })
            .await?;

        tracing::debug!(%layer_id, language = target_language, "Stored machine translation");

        Ok(translation)
    }

    pub async fn get_layers_by_image(&self, image_id: Uuid) -> Result<Vec<TextLayer>, AppError> {
        Ok(self.repo.get_layers_by_image_id(image_id).await?)
    }
}

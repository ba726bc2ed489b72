use crate::server::{
    data::{layer::LayerRepositoryImpl, LayerRepository},
    model::layer::{TextLayer, Translation},
};
use entity::sea_orm_active_enums::TextLayerType;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create_layer;
mod create_translation;
mod find_layer;
mod get_layers_by_image_id;

/// Builds an unsaved bubble layer on `chapter_image_id`.
fn new_layer(chapter_image_id: Uuid, text: &str) -> TextLayer {
    TextLayer {
        id: Uuid::new_v4(),
        chapter_image_id,
        original_text: text.to_string(),
        position_x: 10,
        position_y: 20,
        width: 100,
        height: 50,
        style_json: None,
        layer_type: TextLayerType::Bubble,
        translations: Vec::new(),
    }
}

/// Builds an unsaved machine translation for `text_layer_id`.
fn new_translation(text_layer_id: Uuid, language_code: &str) -> Translation {
    Translation {
        id: Uuid::new_v4(),
        text_layer_id,
        language_code: language_code.to_string(),
        translated_text: format!("Translated: {}", language_code),
        is_machine_translated: true,
        verified: false,
    }
}

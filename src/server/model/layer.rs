use entity::sea_orm_active_enums::TextLayerType;
use uuid::Uuid;

use crate::model::layer::{CreateTextLayerDto, TextLayerDto, TranslationDto};

/// Translatable overlay region on a page image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub id: Uuid,
    pub chapter_image_id: Uuid,
    pub original_text: String,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    /// Font and colour settings. Stored and returned as-is.
    pub style_json: Option<serde_json::Value>,
    pub layer_type: TextLayerType,
    pub translations: Vec<Translation>,
}

impl TextLayer {
    pub fn from_entity(entity: entity::text_layer::Model) -> Self {
        Self {
            id: entity.id,
            chapter_image_id: entity.chapter_image_id,
            original_text: entity.original_text,
            position_x: entity.position_x,
            position_y: entity.position_y,
            width: entity.width,
            height: entity.height,
            style_json: entity.style_json,
            layer_type: entity.layer_type,
            translations: Vec::new(),
        }
    }

    pub fn into_dto(self) -> TextLayerDto {
        TextLayerDto {
            id: self.id,
            chapter_image_id: self.chapter_image_id,
            original_text: self.original_text,
            position_x: self.position_x,
            position_y: self.position_y,
            width: self.width,
            height: self.height,
            style_json: self.style_json,
            layer_type: self.layer_type,
            translations: self
                .translations
                .into_iter()
                .map(Translation::into_dto)
                .collect(),
        }
    }
}

/// Rendition of a layer's text in one target language.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub id: Uuid,
    pub text_layer_id: Uuid,
    pub language_code: String,
    pub translated_text: String,
    pub is_machine_translated: bool,
    pub verified: bool,
}

impl Translation {
    pub fn from_entity(entity: entity::translation::Model) -> Self {
        Self {
            id: entity.id,
            text_layer_id: entity.text_layer_id,
            language_code: entity.language_code,
            translated_text: entity.translated_text,
            is_machine_translated: entity.is_machine_translated,
            verified: entity.verified,
        }
    }

    pub fn into_dto(self) -> TranslationDto {
        TranslationDto {
            id: self.id,
            text_layer_id: self.text_layer_id,
            language_code: self.language_code,
            translated_text: self.translated_text,
            is_machine_translated: self.is_machine_translated,
            verified: self.verified,
        }
    }
}

/// Parameters for placing a new text layer on a page image.
#[derive(Debug, Clone)]
pub struct CreateTextLayerParams {
    pub chapter_image_id: Uuid,
    pub original_text: String,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    pub style_json: Option<serde_json::Value>,
    pub layer_type: TextLayerType,
}

impl CreateTextLayerParams {
    pub fn from_dto(dto: CreateTextLayerDto) -> Self {
        Self {
            chapter_image_id: dto.chapter_image_id,
            original_text: dto.original_text,
            position_x: dto.position_x,
            position_y: dto.position_y,
            width: dto.width,
            height: dto.height,
            style_json: dto.style_json,
            layer_type: dto.layer_type,
        }
    }
}

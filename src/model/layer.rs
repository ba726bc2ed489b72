use entity::sea_orm_active_enums::TextLayerType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTextLayerDto {
    pub chapter_image_id: Uuid,
    pub original_text: String,
    #[serde(default)]
    pub position_x: i32,
    #[serde(default)]
    pub position_y: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub style_json: Option<serde_json::Value>,
    #[serde(rename = "type", default)]
    #[schema(value_type = String)]
    pub layer_type: TextLayerType,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TextLayerDto {
    pub id: Uuid,
    pub chapter_image_id: Uuid,
    pub original_text: String,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    #[schema(value_type = Option<Object>)]
    pub style_json: Option<serde_json::Value>,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub layer_type: TextLayerType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<TranslationDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TranslateLayerDto {
    pub target_lang: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TranslationDto {
    pub id: Uuid,
    pub text_layer_id: Uuid,
    pub language_code: String,
    pub translated_text: String,
    pub is_machine_translated: bool,
    pub verified: bool,
}

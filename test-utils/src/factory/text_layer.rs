//! Text layer factory for creating overlay regions on page images.

use entity::sea_orm_active_enums::TextLayerType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating text layers on a page image.
pub struct TextLayerFactory<'a> {
    db: &'a DatabaseConnection,
    chapter_image_id: Uuid,
    original_text: String,
    layer_type: TextLayerType,
    style_json: Option<serde_json::Value>,
}

impl<'a> TextLayerFactory<'a> {
    /// Creates a new TextLayerFactory with default values.
    ///
    /// Defaults:
    /// - original_text: `"Hello!"`
    /// - layer_type: `bubble`
    /// - position: `(10, 20)` sized `100x50`
    /// - style_json: `None`
    pub fn new(db: &'a DatabaseConnection, chapter_image_id: Uuid) -> Self {
        Self {
            db,
            chapter_image_id,
            original_text: "Hello!".to_string(),
            layer_type: TextLayerType::Bubble,
            style_json: None,
        }
    }

    /// Sets the source-language text.
    pub fn original_text(mut self, original_text: impl Into<String>) -> Self {
        self.original_text = original_text.into();
        self
    }

    /// Sets the layer type.
    pub fn layer_type(mut self, layer_type: TextLayerType) -> Self {
        self.layer_type = layer_type;
        self
    }

    /// Sets the opaque style payload.
    pub fn style_json(mut self, style_json: serde_json::Value) -> Self {
        self.style_json = Some(style_json);
        self
    }

    /// Builds and inserts the text layer entity into the database.
    pub async fn build(self) -> Result<entity::text_layer::Model, DbErr> {
        entity::text_layer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            chapter_image_id: ActiveValue::Set(self.chapter_image_id),
            original_text: ActiveValue::Set(self.original_text),
            position_x: ActiveValue::Set(10),
            position_y: ActiveValue::Set(20),
            width: ActiveValue::Set(100),
            height: ActiveValue::Set(50),
            style_json: ActiveValue::Set(self.style_json),
            layer_type: ActiveValue::Set(self.layer_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a text layer with default values for the specified image.
pub async fn create_text_layer(
    db: &DatabaseConnection,
    chapter_image_id: Uuid,
) -> Result<entity::text_layer::Model, DbErr> {
    TextLayerFactory::new(db, chapter_image_id).build().await
}

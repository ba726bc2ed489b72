//! Translation factory for creating per-language layer renditions.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a machine-translated, unverified translation for a text layer.
///
/// # Arguments
/// - `db` - Database connection
/// - `text_layer_id` - Layer being translated
/// - `language_code` - Target language code
///
/// # Returns
/// - `Ok(entity::translation::Model)` - Created translation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_translation(
    db: &DatabaseConnection,
    text_layer_id: Uuid,
    language_code: impl Into<String>,
) -> Result<entity::translation::Model, DbErr> {
    let language_code = language_code.into();
    entity::translation::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        text_layer_id: ActiveValue::Set(text_layer_id),
        translated_text: ActiveValue::Set(format!("[{}] translated", language_code)),
        language_code: ActiveValue::Set(language_code),
        is_machine_translated: ActiveValue::Set(true),
        verified: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}

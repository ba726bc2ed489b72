//! Season factory for creating test seasons.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test seasons within a series.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    series_id: Uuid,
    season_number: i32,
    title: String,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - season_number: `1`
    /// - title: `"Season {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `series_id` - Series this season belongs to
    pub fn new(db: &'a DatabaseConnection, series_id: Uuid) -> Self {
        Self {
            db,
            series_id,
            season_number: 1,
            title: format!("Season {}", next_id()),
        }
    }

    /// Sets the season number.
    pub fn season_number(mut self, season_number: i32) -> Self {
        self.season_number = season_number;
        self
    }

    /// Sets the season title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the season entity into the database.
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            series_id: ActiveValue::Set(self.series_id),
            season_number: ActiveValue::Set(self.season_number),
            title: ActiveValue::Set(self.title),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season with default values for the specified series.
pub async fn create_season(
    db: &DatabaseConnection,
    series_id: Uuid,
) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db, series_id).build().await
}

use sea_orm::entity::prelude::*;

use crate::{
    sea_orm_active_enums::{SeriesStatus, Visibility},
    MultilingualText, StringList,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "series")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub creator_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub title: MultilingualText,
    #[sea_orm(column_type = "JsonBinary")]
    pub subtitle: MultilingualText,
    #[sea_orm(column_type = "JsonBinary")]
    pub description: MultilingualText,
    pub author: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub genres: StringList,
    pub thumbnail_url: String,
    pub cover_image_url: String,
    pub banner_image_url: String,
    pub status: SeriesStatus,
    pub visibility: Visibility,
    pub nsfw: bool,
    pub schedule_publish_at: Option<ChronoDateTimeUtc>,
    pub monetization_enabled: bool,
    pub monetization_type: String,
    pub default_unlock_type: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::season::Entity")]
    Season,
    #[sea_orm(has_many = "super::series_tag::Entity")]
    SeriesTag,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::series_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeriesTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::series_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::series_tag::Relation::Series.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

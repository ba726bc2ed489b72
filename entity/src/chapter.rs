use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ChapterStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chapters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub season_id: Uuid,
    pub chapter_number: i32,
    pub title: String,
    pub status: ChapterStatus,
    pub published_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(has_many = "super::chapter_image::Entity")]
    ChapterImage,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::chapter_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChapterImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

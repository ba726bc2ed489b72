use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::TextLayerType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "text_layers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub chapter_image_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub original_text: String,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    /// Font, size, colour and similar rendering hints; never interpreted.
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub style_json: Option<Json>,
    pub layer_type: TextLayerType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chapter_image::Entity",
        from = "Column::ChapterImageId",
        to = "super::chapter_image::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ChapterImage,
    #[sea_orm(has_many = "super::translation::Entity")]
    Translation,
}

impl Related<super::chapter_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChapterImage.def()
    }
}

impl Related<super::translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Translation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

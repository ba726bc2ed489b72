use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "translations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub text_layer_id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(5))")]
    pub language_code: String,
    #[sea_orm(column_type = "Text")]
    pub translated_text: String,
    pub is_machine_translated: bool,
    pub verified: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::text_layer::Entity",
        from = "Column::TextLayerId",
        to = "super::text_layer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TextLayer,
}

impl Related<super::text_layer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TextLayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

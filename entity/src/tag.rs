use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// URL-safe handle; indexed for lookup but not unique, every series
    /// creation mints its own tag rows.
    #[sea_orm(indexed)]
    pub slug: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_translation::Entity")]
    TagTranslation,
    #[sea_orm(has_many = "super::series_tag::Entity")]
    SeriesTag,
}

impl Related<super::tag_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagTranslation.def()
    }
}

impl Related<super::series_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeriesTag.def()
    }
}

impl Related<super::series::Entity> for Entity {
    fn to() -> RelationDef {
        super::series_tag::Relation::Series.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::series_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

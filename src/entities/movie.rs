use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub movie_id: i32,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub plot: String,
    pub runtime: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cast_crew::Entity")]
    CastCrew,
    #[sea_orm(has_many = "super::watch_event::Entity")]
    WatchEvent,
}

impl Related<super::cast_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CastCrew.def()
    }
}

impl Related<super::watch_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "director")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub director_id: i32,
    pub name: String,
    pub birth_year: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cast_crew::Entity")]
    CastCrew,
}

impl Related<super::cast_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CastCrew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

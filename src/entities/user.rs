use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub name: String,
    pub birth_year: i32,
    pub password: String,
    pub profile_picture: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::watch_event::Entity")]
    WatchEvent,
    #[sea_orm(has_one = "super::summary::Entity")]
    Summary,
}

impl Related<super::watch_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchEvent.def()
    }
}

impl Related<super::summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Summary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

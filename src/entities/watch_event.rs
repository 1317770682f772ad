use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One record of a user having watched a movie on a given date.
///
/// `watch_date` is stored as an ISO-8601 string so lexicographic ordering
/// in the database matches chronological ordering.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "watch_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub watch_id: i32,
    pub user_id: String,
    pub movie_id: i32,
    pub watch_date: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub review: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::MovieId",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Denormalized per-user viewing statistics.
///
/// `user_id` carries a unique index, so at most one row exists per user
/// and upserts can target it directly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub summary_id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    #[sea_orm(column_type = "Decimal(Some((4, 2)))", nullable)]
    pub avg_rating: Option<Decimal>,
    pub highest_rated_movie: Option<String>,
    pub top_actor: String,
    pub total_movies_watched: i32,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

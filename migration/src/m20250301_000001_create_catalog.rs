use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::MovieId))
                    .col(string(Movie::Title))
                    .col(integer(Movie::ReleaseYear))
                    .col(string(Movie::Genre))
                    .col(double(Movie::Rating))
                    .col(text(Movie::Plot))
                    .col(string(Movie::Runtime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_title")
                    .table(Movie::Table)
                    .col(Movie::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(integer(Actor::ActorId).primary_key())
                    .col(string(Actor::Name))
                    .col(integer_null(Actor::BirthYear))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Director::Table)
                    .if_not_exists()
                    .col(integer(Director::DirectorId).primary_key())
                    .col(string(Director::Name))
                    .col(integer_null(Director::BirthYear))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CastCrew::Table)
                    .if_not_exists()
                    .col(pk_auto(CastCrew::LinkId))
                    .col(integer(CastCrew::MovieId))
                    .col(integer(CastCrew::ActorId))
                    .col(integer(CastCrew::DirectorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cast_crew_movie")
                            .from(CastCrew::Table, CastCrew::MovieId)
                            .to(Movie::Table, Movie::MovieId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cast_crew_actor")
                            .from(CastCrew::Table, CastCrew::ActorId)
                            .to(Actor::Table, Actor::ActorId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cast_crew_director")
                            .from(CastCrew::Table, CastCrew::DirectorId)
                            .to(Director::Table, Director::DirectorId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cast_crew_movie")
                    .table(CastCrew::Table)
                    .col(CastCrew::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cast_crew_actor")
                    .table(CastCrew::Table)
                    .col(CastCrew::ActorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CastCrew::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Director::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    MovieId,
    Title,
    ReleaseYear,
    Genre,
    Rating,
    Plot,
    Runtime,
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    ActorId,
    Name,
    BirthYear,
}

#[derive(DeriveIden)]
enum Director {
    Table,
    DirectorId,
    Name,
    BirthYear,
}

#[derive(DeriveIden)]
enum CastCrew {
    Table,
    LinkId,
    MovieId,
    ActorId,
    DirectorId,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::UserId).primary_key())
                    .col(string(User::Name))
                    .col(integer(User::BirthYear))
                    .col(string(User::Password))
                    .col(string(User::ProfilePicture))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WatchEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(WatchEvent::WatchId))
                    .col(string(WatchEvent::UserId))
                    .col(integer(WatchEvent::MovieId))
                    .col(string(WatchEvent::WatchDate))
                    .col(double(WatchEvent::Rating))
                    .col(text(WatchEvent::Review))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_event_user")
                            .from(WatchEvent::Table, WatchEvent::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watch_event_movie")
                            .from(WatchEvent::Table, WatchEvent::MovieId)
                            .to(Movie::Table, Movie::MovieId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_watch_event_user_date")
                    .table(WatchEvent::Table)
                    .col(WatchEvent::UserId)
                    .col(WatchEvent::WatchDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Summary::Table)
                    .if_not_exists()
                    .col(pk_auto(Summary::SummaryId))
                    .col(string(Summary::UserId))
                    .col(decimal_len_null(Summary::AvgRating, 4, 2))
                    .col(string_null(Summary::HighestRatedMovie))
                    .col(string(Summary::TopActor))
                    .col(integer(Summary::TotalMoviesWatched))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_summary_user")
                            .from(Summary::Table, Summary::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One summary row per user, enforced by the schema so concurrent
        // recomputations cannot insert duplicates.
        manager
            .create_index(
                Index::create()
                    .name("idx_summary_user_unique")
                    .table(Summary::Table)
                    .col(Summary::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Summary::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(WatchEvent::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
    Name,
    BirthYear,
    Password,
    ProfilePicture,
}

#[derive(DeriveIden)]
enum WatchEvent {
    Table,
    WatchId,
    UserId,
    MovieId,
    WatchDate,
    Rating,
    Review,
}

#[derive(DeriveIden)]
enum Summary {
    Table,
    SummaryId,
    UserId,
    AvgRating,
    HighestRatedMovie,
    TopActor,
    TotalMoviesWatched,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    MovieId,
}

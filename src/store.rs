//! Query and write primitives over the cinelog schema.
//!
//! Everything is generic over [`ConnectionTrait`] so the same operations run
//! against the pooled connection or inside an open transaction.

use jiff::civil::Date;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
    sea_query::{Expr, Func, OnConflict},
};

use crate::{
    entities::{actor, cast_crew, director, movie, summary, user, watch_event},
    error::AppResult,
    models::{
        ActorAppearance, HistoryEntry, NewMovie, NewUser, NewWatchEvent, SummaryValues,
        WatchEventUpdate, WatchRecord,
    },
};

pub async fn insert_movie<C: ConnectionTrait>(conn: &C, new: &NewMovie) -> AppResult<movie::Model> {
    let model = movie::ActiveModel {
        movie_id: Default::default(),
        title: Set(new.title.clone()),
        release_year: Set(new.release_year),
        genre: Set(new.genre.clone()),
        rating: Set(new.rating),
        plot: Set(new.plot.clone()),
        runtime: Set(new.runtime.clone()),
    };
    Ok(model.insert(conn).await?)
}

pub async fn find_movie<C: ConnectionTrait>(
    conn: &C,
    movie_id: i32,
) -> AppResult<Option<movie::Model>> {
    Ok(movie::Entity::find_by_id(movie_id).one(conn).await?)
}

/// All movies ordered by title, as offered to the "log a watch" form.
pub async fn list_movies<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<movie::Model>> {
    Ok(movie::Entity::find().order_by_asc(movie::Column::Title).all(conn).await?)
}

pub async fn insert_actor<C: ConnectionTrait>(
    conn: &C,
    actor_id: i32,
    name: &str,
    birth_year: Option<i32>,
) -> AppResult<actor::Model> {
    let model = actor::ActiveModel {
        actor_id: Set(actor_id),
        name: Set(name.to_string()),
        birth_year: Set(birth_year),
    };
    Ok(model.insert(conn).await?)
}

pub async fn insert_director<C: ConnectionTrait>(
    conn: &C,
    director_id: i32,
    name: &str,
    birth_year: Option<i32>,
) -> AppResult<director::Model> {
    let model = director::ActiveModel {
        director_id: Set(director_id),
        name: Set(name.to_string()),
        birth_year: Set(birth_year),
    };
    Ok(model.insert(conn).await?)
}

pub async fn link_cast<C: ConnectionTrait>(
    conn: &C,
    movie_id: i32,
    actor_id: i32,
    director_id: i32,
) -> AppResult<cast_crew::Model> {
    let model = cast_crew::ActiveModel {
        link_id: Default::default(),
        movie_id: Set(movie_id),
        actor_id: Set(actor_id),
        director_id: Set(director_id),
    };
    Ok(model.insert(conn).await?)
}

pub async fn insert_user<C: ConnectionTrait>(conn: &C, new: &NewUser) -> AppResult<user::Model> {
    let model = user::ActiveModel {
        user_id: Set(new.user_id.clone()),
        name: Set(new.name.clone()),
        birth_year: Set(new.birth_year),
        password: Set(new.password.clone()),
        profile_picture: Set(new.profile_picture.clone()),
    };
    Ok(model.insert(conn).await?)
}

pub async fn find_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> AppResult<Option<user::Model>> {
    Ok(user::Entity::find_by_id(user_id.to_string()).one(conn).await?)
}

pub async fn insert_watch_event<C: ConnectionTrait>(
    conn: &C,
    new: &NewWatchEvent,
) -> AppResult<watch_event::Model> {
    let model = watch_event::ActiveModel {
        watch_id: Default::default(),
        user_id: Set(new.user_id.clone()),
        movie_id: Set(new.movie_id),
        watch_date: Set(new.watch_date.to_string()),
        rating: Set(new.rating),
        review: Set(new.review.clone()),
    };
    Ok(model.insert(conn).await?)
}

/// Looks up a watch event scoped to its owner, so one user cannot touch
/// another user's history.
pub async fn find_watch_event_for_user<C: ConnectionTrait>(
    conn: &C,
    watch_id: i32,
    user_id: &str,
) -> AppResult<Option<watch_event::Model>> {
    Ok(watch_event::Entity::find_by_id(watch_id)
        .filter(watch_event::Column::UserId.eq(user_id))
        .one(conn)
        .await?)
}

pub async fn update_watch_event<C: ConnectionTrait>(
    conn: &C,
    existing: watch_event::Model,
    changes: &WatchEventUpdate,
) -> AppResult<watch_event::Model> {
    let mut active: watch_event::ActiveModel = existing.into();
    if let Some(movie_id) = changes.movie_id {
        active.movie_id = Set(movie_id);
    }
    if let Some(watch_date) = changes.watch_date {
        active.watch_date = Set(watch_date.to_string());
    }
    if let Some(rating) = changes.rating {
        active.rating = Set(rating);
    }
    if let Some(review) = &changes.review {
        active.review = Set(review.clone());
    }
    Ok(active.update(conn).await?)
}

pub async fn delete_watch_event<C: ConnectionTrait>(
    conn: &C,
    existing: watch_event::Model,
) -> AppResult<()> {
    existing.delete(conn).await?;
    Ok(())
}

/// A user's watch events joined with their movies, newest watch first,
/// in the shape the aggregator consumes.
pub async fn find_watch_events<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> AppResult<Vec<WatchRecord>> {
    let rows = watch_event::Entity::find()
        .find_also_related(movie::Entity)
        .filter(watch_event::Column::UserId.eq(user_id))
        .order_by_desc(watch_event::Column::WatchDate)
        .order_by_asc(watch_event::Column::WatchId)
        .all(conn)
        .await?;

    let mut records = Vec::with_capacity(rows.len());
    for (event, movie) in rows {
        // Referential integrity makes the movie present for every event.
        let Some(movie) = movie else {
            continue;
        };
        let watch_date: Date = event.watch_date.parse()?;
        records.push(WatchRecord {
            movie_id: event.movie_id,
            movie_title: movie.title,
            watch_date,
            rating: event.rating,
        });
    }
    Ok(records)
}

pub async fn watch_history<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    limit: Option<u64>,
) -> AppResult<Vec<HistoryEntry>> {
    let mut query = watch_event::Entity::find()
        .find_also_related(movie::Entity)
        .filter(watch_event::Column::UserId.eq(user_id))
        .order_by_desc(watch_event::Column::WatchDate)
        .order_by_desc(watch_event::Column::WatchId);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    let rows = query.all(conn).await?;

    let mut entries = Vec::with_capacity(rows.len());
    for (event, movie) in rows {
        let Some(movie) = movie else {
            continue;
        };
        let watch_date: Date = event.watch_date.parse()?;
        entries.push(HistoryEntry {
            watch_id: event.watch_id,
            movie_id: event.movie_id,
            movie_title: movie.title,
            watch_date,
            rating: event.rating,
            review: event.review,
        });
    }
    Ok(entries)
}

pub async fn count_watch_events<C: ConnectionTrait>(conn: &C, user_id: &str) -> AppResult<u64> {
    Ok(watch_event::Entity::find()
        .filter(watch_event::Column::UserId.eq(user_id))
        .count(conn)
        .await?)
}

/// Live AVG over the user's ratings; `None` when there are no events.
pub async fn average_rating<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> AppResult<Option<f64>> {
    let avg: Option<Option<f64>> = watch_event::Entity::find()
        .select_only()
        .expr_as(Func::avg(Expr::col(watch_event::Column::Rating)), "avg_rating")
        .filter(watch_event::Column::UserId.eq(user_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(avg.flatten())
}

pub async fn find_summary<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> AppResult<Option<summary::Model>> {
    Ok(summary::Entity::find()
        .filter(summary::Column::UserId.eq(user_id))
        .one(conn)
        .await?)
}

/// Writes the user's summary in one atomic statement. The unique index on
/// `user_id` turns a second insert into an in-place update, so concurrent
/// recomputations can never leave two rows behind.
pub async fn upsert_summary<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    values: &SummaryValues,
) -> AppResult<()> {
    let model = summary::ActiveModel {
        summary_id: Default::default(),
        user_id: Set(user_id.to_string()),
        avg_rating: Set(values.avg_rating),
        highest_rated_movie: Set(values.highest_rated_movie.clone()),
        top_actor: Set(values.top_actor.clone()),
        total_movies_watched: Set(values.total_movies_watched),
    };

    summary::Entity::insert(model)
        .on_conflict(
            OnConflict::column(summary::Column::UserId)
                .update_columns([
                    summary::Column::AvgRating,
                    summary::Column::HighestRatedMovie,
                    summary::Column::TopActor,
                    summary::Column::TotalMoviesWatched,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;

    Ok(())
}

/// Counts cast/crew rows per actor across the given movies. Ordering is
/// left to the caller; the result carries everything needed to pick a
/// winner deterministically.
pub async fn count_actor_appearances<C: ConnectionTrait>(
    conn: &C,
    movie_ids: &[i32],
) -> AppResult<Vec<ActorAppearance>> {
    if movie_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<(i32, String, i64)> = cast_crew::Entity::find()
        .select_only()
        .column(cast_crew::Column::ActorId)
        .column(actor::Column::Name)
        .column_as(cast_crew::Column::LinkId.count(), "appearances")
        .inner_join(actor::Entity)
        .filter(cast_crew::Column::MovieId.is_in(movie_ids.iter().copied()))
        .group_by(cast_crew::Column::ActorId)
        .group_by(actor::Column::Name)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(actor_id, actor_name, appearances)| ActorAppearance {
            actor_id,
            actor_name,
            appearances,
        })
        .collect())
}

//! Summary recomputation against a real (in-memory) database: persisted
//! values, upsert behavior, and the unknown-user no-op.

mod common;

use cinelog::{
    aggregator,
    entities::summary,
    models::{NO_TOP_ACTOR, SummaryValues},
    store,
};
use common::{ACTOR_SHARED, USER, d, log, open_db, register, seed_catalog};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

#[tokio::test]
async fn registration_creates_blank_summary() {
    let db = open_db().await;
    register(&db, USER).await;

    let summary = store::find_summary(&db, USER).await.unwrap().unwrap();
    assert_eq!(summary.avg_rating, None);
    assert_eq!(summary.highest_rated_movie, None);
    assert_eq!(summary.top_actor, NO_TOP_ACTOR);
    assert_eq!(summary.total_movies_watched, 0);
}

#[tokio::test]
async fn average_is_rounded_to_two_places() {
    let db = open_db().await;
    let catalog = seed_catalog(&db).await;
    register(&db, USER).await;

    log(&db, USER, catalog.aurora, d(2024, 1, 10), 8.0).await;
    log(&db, USER, catalog.tideline, d(2024, 2, 11), 6.0).await;
    log(&db, USER, catalog.redwood, d(2024, 3, 12), 10.0).await;

    let summary = store::find_summary(&db, USER).await.unwrap().unwrap();
    assert_eq!(summary.avg_rating, Some(Decimal::new(800, 2)));
    assert_eq!(summary.total_movies_watched, 3);
}

#[tokio::test]
async fn highest_rated_tie_breaks_on_later_watch_date() {
    let db = open_db().await;
    let catalog = seed_catalog(&db).await;
    register(&db, USER).await;

    log(&db, USER, catalog.aurora, d(2024, 1, 1), 9.0).await;
    log(&db, USER, catalog.tideline, d(2024, 6, 1), 9.0).await;

    let summary = store::find_summary(&db, USER).await.unwrap().unwrap();
    assert_eq!(summary.highest_rated_movie.as_deref(), Some("Tideline"));
}

#[tokio::test]
async fn top_actor_is_the_common_cast_member() {
    let db = open_db().await;
    let catalog = seed_catalog(&db).await;
    register(&db, USER).await;

    // Aurora and Tideline share actor 10 (Marta Vell); everyone else
    // appears only once across the watched set.
    log(&db, USER, catalog.aurora, d(2024, 1, 10), 7.0).await;
    log(&db, USER, catalog.tideline, d(2024, 2, 10), 8.0).await;

    let summary = store::find_summary(&db, USER).await.unwrap().unwrap();
    assert_eq!(summary.top_actor, "Marta Vell");

    let appearances =
        store::count_actor_appearances(&db, &[catalog.aurora, catalog.tideline]).await.unwrap();
    let shared = appearances.iter().find(|a| a.actor_id == ACTOR_SHARED).unwrap();
    assert_eq!(shared.appearances, 2);
}

#[tokio::test]
async fn recompute_is_idempotent() {
    let db = open_db().await;
    let catalog = seed_catalog(&db).await;
    register(&db, USER).await;

    log(&db, USER, catalog.aurora, d(2024, 1, 10), 8.5).await;
    log(&db, USER, catalog.redwood, d(2024, 2, 10), 5.5).await;

    let first = store::find_summary(&db, USER).await.unwrap().unwrap();
    aggregator::recompute_for_user(&db, USER).await.unwrap();
    let second = store::find_summary(&db, USER).await.unwrap().unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn recompute_upserts_rather_than_duplicating() {
    let db = open_db().await;
    seed_catalog(&db).await;

    // A user created without the registration flow has no summary row yet.
    store::insert_user(&db, &common::new_user(USER)).await.unwrap();
    assert!(store::find_summary(&db, USER).await.unwrap().is_none());

    aggregator::recompute_for_user(&db, USER).await.unwrap();
    aggregator::recompute_for_user(&db, USER).await.unwrap();

    let rows = summary::Entity::find()
        .filter(summary::Column::UserId.eq(USER))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn unknown_user_recompute_is_a_noop() {
    let db = open_db().await;

    let result = aggregator::recompute_for_user(&db, "nobody").await.unwrap();
    assert_eq!(result, None);
    assert!(store::find_summary(&db, "nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn recompute_returns_the_persisted_values() {
    let db = open_db().await;
    let catalog = seed_catalog(&db).await;
    register(&db, USER).await;

    log(&db, USER, catalog.tideline, d(2024, 4, 2), 9.0).await;

    let values: SummaryValues =
        aggregator::recompute_for_user(&db, USER).await.unwrap().unwrap();
    let summary = store::find_summary(&db, USER).await.unwrap().unwrap();

    assert_eq!(summary.avg_rating, values.avg_rating);
    assert_eq!(summary.highest_rated_movie, values.highest_rated_movie);
    assert_eq!(summary.top_actor, values.top_actor);
    assert_eq!(summary.total_movies_watched, values.total_movies_watched);
}

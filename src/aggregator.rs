//! Recomputes a user's denormalized viewing summary from their watch events.
//!
//! The arithmetic lives in [`compute`], a pure function over already-fetched
//! rows; [`recompute_for_user`] wraps it with the fetch and the upsert in a
//! single transaction. Whichever recomputation commits last wins, and every
//! run derives its values from the full event set, so the row is always
//! self-consistent.

use rust_decimal::{Decimal, prelude::FromPrimitive};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{
    error::AppResult,
    models::{ActorAppearance, NO_TOP_ACTOR, SummaryValues, WatchRecord},
    store,
};

/// Derives summary values from a user's watch records and the actor
/// appearance counts over the movies they watched.
///
/// Policies:
/// - average rating is the arithmetic mean rounded to 2 decimal places
///   (midpoints round to even);
/// - highest-rated movie is picked by rating, then by most recent watch
///   date, then by the first record in input order;
/// - top actor is picked by appearance count, then by lowest actor id.
pub fn compute(records: &[WatchRecord], appearances: &[ActorAppearance]) -> SummaryValues {
    if records.is_empty() {
        return SummaryValues::default();
    }

    let avg = records.iter().map(|r| r.rating).sum::<f64>() / records.len() as f64;
    let avg_rating = Decimal::from_f64(avg).map(|d| d.round_dp(2));

    let mut best: Option<&WatchRecord> = None;
    for record in records {
        let better = match best {
            None => true,
            Some(current) => {
                record.rating > current.rating
                    || (record.rating == current.rating && record.watch_date > current.watch_date)
            },
        };
        if better {
            best = Some(record);
        }
    }
    let highest_rated_movie = best.map(|r| r.movie_title.clone());

    let top_actor = appearances
        .iter()
        .max_by_key(|a| (a.appearances, std::cmp::Reverse(a.actor_id)))
        .map(|a| a.actor_name.clone())
        .unwrap_or_else(|| NO_TOP_ACTOR.to_string());

    SummaryValues {
        avg_rating,
        highest_rated_movie,
        top_actor,
        total_movies_watched: records.len() as i32,
    }
}

/// Recomputes and persists the summary for one user.
///
/// Unknown users are a no-op returning `Ok(None)`: callers may trigger a
/// recompute speculatively before the user row is materialized. Store
/// failures propagate unchanged.
pub async fn recompute_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> AppResult<Option<SummaryValues>> {
    if store::find_user(db, user_id).await?.is_none() {
        debug!(user_id = %user_id, "summary recompute skipped, unknown user");
        return Ok(None);
    }

    let txn = db.begin().await?;

    let records = store::find_watch_events(&txn, user_id).await?;
    let mut movie_ids: Vec<i32> = records.iter().map(|r| r.movie_id).collect();
    movie_ids.sort_unstable();
    movie_ids.dedup();
    let appearances = store::count_actor_appearances(&txn, &movie_ids).await?;

    let values = compute(&records, &appearances);
    store::upsert_summary(&txn, user_id, &values).await?;

    txn.commit().await?;

    debug!(
        user_id = %user_id,
        total = values.total_movies_watched,
        top_actor = %values.top_actor,
        "summary recomputed"
    );
    Ok(Some(values))
}

//! User-facing operations of the tracker, minus their HTTP surface.
//!
//! Each write path finishes by recomputing the owner's summary, so the
//! persisted statistics never lag behind the watch history.

use rust_decimal::{Decimal, prelude::FromPrimitive};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{
    aggregator,
    entities::{user, watch_event},
    error::{AppError, AppResult},
    models::{
        DashboardView, HistoryEntry, NewUser, NewWatchEvent, SummaryValues, WatchEventUpdate,
        WrappedView,
    },
    store,
};

/// Ratings are tenths on a 0.1-10 scale.
pub const MIN_RATING: f64 = 0.1;
pub const MAX_RATING: f64 = 10.0;

const DASHBOARD_RECENT_LIMIT: u64 = 5;

fn check_rating(rating: f64) -> AppResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Creates a user together with their blank summary row.
pub async fn register_user(db: &DatabaseConnection, new: NewUser) -> AppResult<user::Model> {
    let txn = db.begin().await?;
    let model = store::insert_user(&txn, &new).await?;
    store::upsert_summary(&txn, &model.user_id, &SummaryValues::default()).await?;
    txn.commit().await?;

    debug!(user_id = %model.user_id, "user registered");
    Ok(model)
}

/// Records a watch event and refreshes the owner's summary.
pub async fn log_watch(
    db: &DatabaseConnection,
    new: NewWatchEvent,
) -> AppResult<watch_event::Model> {
    check_rating(new.rating)?;

    if store::find_user(db, &new.user_id).await?.is_none() {
        return Err(AppError::UserNotFound(new.user_id));
    }
    if store::find_movie(db, new.movie_id).await?.is_none() {
        return Err(AppError::MovieNotFound(new.movie_id));
    }

    let model = store::insert_watch_event(db, &new).await?;
    aggregator::recompute_for_user(db, &model.user_id).await?;

    debug!(user_id = %model.user_id, movie_id = model.movie_id, "watch event logged");
    Ok(model)
}

/// Applies a partial edit to one of the user's own watch events and
/// refreshes their summary.
pub async fn edit_watch(
    db: &DatabaseConnection,
    watch_id: i32,
    user_id: &str,
    changes: WatchEventUpdate,
) -> AppResult<watch_event::Model> {
    if let Some(rating) = changes.rating {
        check_rating(rating)?;
    }
    if let Some(movie_id) = changes.movie_id {
        if store::find_movie(db, movie_id).await?.is_none() {
            return Err(AppError::MovieNotFound(movie_id));
        }
    }

    let Some(existing) = store::find_watch_event_for_user(db, watch_id, user_id).await? else {
        return Err(AppError::WatchEventNotFound(watch_id));
    };

    if changes.movie_id.is_none()
        && changes.watch_date.is_none()
        && changes.rating.is_none()
        && changes.review.is_none()
    {
        return Ok(existing);
    }

    let model = store::update_watch_event(db, existing, &changes).await?;
    aggregator::recompute_for_user(db, user_id).await?;

    debug!(user_id = %user_id, watch_id = watch_id, "watch event updated");
    Ok(model)
}

/// Deletes one of the user's own watch events and refreshes their summary.
pub async fn delete_watch(db: &DatabaseConnection, watch_id: i32, user_id: &str) -> AppResult<()> {
    let Some(existing) = store::find_watch_event_for_user(db, watch_id, user_id).await? else {
        return Err(AppError::WatchEventNotFound(watch_id));
    };

    store::delete_watch_event(db, existing).await?;
    aggregator::recompute_for_user(db, user_id).await?;

    debug!(user_id = %user_id, watch_id = watch_id, "watch event deleted");
    Ok(())
}

/// Full watch history, newest first.
pub async fn watch_history(
    db: &DatabaseConnection,
    user_id: &str,
) -> AppResult<Vec<HistoryEntry>> {
    if store::find_user(db, user_id).await?.is_none() {
        return Err(AppError::UserNotFound(user_id.to_string()));
    }
    store::watch_history(db, user_id, None).await
}

/// Landing-page data: the five most recent entries plus live aggregates
/// computed straight from the watch events.
pub async fn dashboard(db: &DatabaseConnection, user_id: &str) -> AppResult<DashboardView> {
    let Some(user) = store::find_user(db, user_id).await? else {
        return Err(AppError::UserNotFound(user_id.to_string()));
    };

    let recent = store::watch_history(db, user_id, Some(DASHBOARD_RECENT_LIMIT)).await?;
    let watch_count = store::count_watch_events(db, user_id).await?;
    let avg_rating = store::average_rating(db, user_id)
        .await?
        .and_then(Decimal::from_f64)
        .map(|d| d.round_dp(2));

    Ok(DashboardView { user_name: user.name, recent, watch_count, avg_rating })
}

/// The persisted wrapped summary, or `None` when there is nothing to show
/// yet (no summary row, or one with no watch events behind it).
pub async fn wrapped_summary(
    db: &DatabaseConnection,
    user_id: &str,
) -> AppResult<Option<WrappedView>> {
    let Some(summary) = store::find_summary(db, user_id).await? else {
        return Ok(None);
    };
    if summary.total_movies_watched == 0 {
        return Ok(None);
    }

    Ok(Some(WrappedView {
        avg_rating: summary.avg_rating,
        highest_rated_movie: summary.highest_rated_movie,
        top_actor: summary.top_actor,
        total_movies_watched: summary.total_movies_watched,
    }))
}

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Serialize;

/// Sentinel stored in `summary.top_actor` when no actor can be determined.
pub const NO_TOP_ACTOR: &str = "N/A";

#[derive(Clone, Debug)]
pub struct NewUser {
    pub user_id: String,
    pub name: String,
    pub birth_year: i32,
    pub password: String,
    pub profile_picture: String,
}

#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub rating: f64,
    pub plot: String,
    pub runtime: String,
}

#[derive(Clone, Debug)]
pub struct NewWatchEvent {
    pub user_id: String,
    pub movie_id: i32,
    pub watch_date: Date,
    pub rating: f64,
    pub review: String,
}

/// Partial update for an existing watch event; `None` leaves a field as is.
#[derive(Clone, Debug, Default)]
pub struct WatchEventUpdate {
    pub movie_id: Option<i32>,
    pub watch_date: Option<Date>,
    pub rating: Option<f64>,
    pub review: Option<String>,
}

/// One watch event joined with its movie, as consumed by the aggregator.
#[derive(Clone, Debug, PartialEq)]
pub struct WatchRecord {
    pub movie_id: i32,
    pub movie_title: String,
    pub watch_date: Date,
    pub rating: f64,
}

/// How many of a given movie set's cast/crew rows an actor appears in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorAppearance {
    pub actor_id: i32,
    pub actor_name: String,
    pub appearances: i64,
}

/// Derived statistics for one user, ready to be persisted as a summary row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryValues {
    pub avg_rating: Option<Decimal>,
    pub highest_rated_movie: Option<String>,
    pub top_actor: String,
    pub total_movies_watched: i32,
}

impl Default for SummaryValues {
    fn default() -> Self {
        Self {
            avg_rating: None,
            highest_rated_movie: None,
            top_actor: NO_TOP_ACTOR.to_string(),
            total_movies_watched: 0,
        }
    }
}

/// A watch-history line as shown to the user, newest first.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryEntry {
    pub watch_id: i32,
    pub movie_id: i32,
    pub movie_title: String,
    pub watch_date: Date,
    pub rating: f64,
    pub review: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct DashboardView {
    pub user_name: String,
    pub recent: Vec<HistoryEntry>,
    pub watch_count: u64,
    pub avg_rating: Option<Decimal>,
}

#[derive(Clone, Debug, Serialize)]
pub struct WrappedView {
    pub avg_rating: Option<Decimal>,
    pub highest_rated_movie: Option<String>,
    pub top_actor: String,
    pub total_movies_watched: i32,
}

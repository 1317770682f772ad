use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("invalid date: {0}")]
    Date(#[from] jiff::Error),

    #[error("user `{0}` does not exist")]
    UserNotFound(String),

    #[error("movie {0} does not exist")]
    MovieNotFound(i32),

    #[error("watch event {0} does not exist")]
    WatchEventNotFound(i32),

    #[error("rating {0} is outside the 0.1-10 range")]
    RatingOutOfRange(f64),
}

pub type AppResult<T> = Result<T, AppError>;

pub mod actor;
pub mod cast_crew;
pub mod director;
pub mod movie;
pub mod summary;
pub mod user;
pub mod watch_event;

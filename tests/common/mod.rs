//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use cinelog::{
    db, logging,
    models::{NewMovie, NewUser, NewWatchEvent},
    service, store,
};
use jiff::civil::Date;
use sea_orm::DatabaseConnection;

pub const USER: &str = "frida";

pub const ACTOR_SHARED: i32 = 10;
pub const ACTOR_AURORA: i32 = 11;
pub const ACTOR_TIDELINE: i32 = 12;

pub async fn open_db() -> DatabaseConnection {
    logging::init("warn");
    db::connect_and_migrate("sqlite::memory:").await.unwrap()
}

pub fn d(year: i16, month: i8, day: i8) -> Date {
    jiff::civil::date(year, month, day)
}

pub fn new_user(user_id: &str) -> NewUser {
    NewUser {
        user_id: user_id.to_string(),
        name: format!("{user_id} display"),
        birth_year: 1990,
        password: "hunter2".to_string(),
        profile_picture: String::new(),
    }
}

pub async fn register(db: &DatabaseConnection, user_id: &str) {
    service::register_user(db, new_user(user_id)).await.unwrap();
}

/// Movie ids of the seeded catalog.
pub struct Catalog {
    pub aurora: i32,
    pub tideline: i32,
    pub redwood: i32,
}

/// Three movies with a small cast: "Aurora" and "Tideline" share one
/// actor, "Redwood" has a cast of its own.
pub async fn seed_catalog(db: &DatabaseConnection) -> Catalog {
    let aurora = store::insert_movie(
        db,
        &NewMovie {
            title: "Aurora".to_string(),
            release_year: 2019,
            genre: "Drama".to_string(),
            rating: 7.4,
            plot: "A lighthouse keeper rides out one last winter.".to_string(),
            runtime: "112 min".to_string(),
        },
    )
    .await
    .unwrap()
    .movie_id;

    let tideline = store::insert_movie(
        db,
        &NewMovie {
            title: "Tideline".to_string(),
            release_year: 2021,
            genre: "Thriller".to_string(),
            rating: 8.1,
            plot: "A coastal town wakes up to an empty harbor.".to_string(),
            runtime: "97 min".to_string(),
        },
    )
    .await
    .unwrap()
    .movie_id;

    let redwood = store::insert_movie(
        db,
        &NewMovie {
            title: "Redwood".to_string(),
            release_year: 2016,
            genre: "Drama".to_string(),
            rating: 6.9,
            plot: "Two estranged brothers inherit a failing sawmill.".to_string(),
            runtime: "124 min".to_string(),
        },
    )
    .await
    .unwrap()
    .movie_id;

    store::insert_actor(db, ACTOR_SHARED, "Marta Vell", Some(1978)).await.unwrap();
    store::insert_actor(db, ACTOR_AURORA, "Joon Park", Some(1985)).await.unwrap();
    store::insert_actor(db, ACTOR_TIDELINE, "Ines Roca", None).await.unwrap();
    store::insert_director(db, 100, "R. Calder", Some(1962)).await.unwrap();
    store::insert_director(db, 101, "Dana Voss", Some(1974)).await.unwrap();

    store::link_cast(db, aurora, ACTOR_SHARED, 100).await.unwrap();
    store::link_cast(db, aurora, ACTOR_AURORA, 100).await.unwrap();
    store::link_cast(db, tideline, ACTOR_SHARED, 101).await.unwrap();
    store::link_cast(db, tideline, ACTOR_TIDELINE, 101).await.unwrap();
    store::link_cast(db, redwood, ACTOR_TIDELINE, 100).await.unwrap();

    Catalog { aurora, tideline, redwood }
}

pub async fn log(
    db: &DatabaseConnection,
    user_id: &str,
    movie_id: i32,
    watch_date: Date,
    rating: f64,
) -> i32 {
    service::log_watch(
        db,
        NewWatchEvent {
            user_id: user_id.to_string(),
            movie_id,
            watch_date,
            rating,
            review: String::new(),
        },
    )
    .await
    .unwrap()
    .watch_id
}

#![allow(dead_code)]

use movie_catalog::{
    Catalog, Config, DeletePolicy, db,
    models::{NewCrewMember, NewMovie, NewReview, NewWorker},
};
use tempfile::TempDir;

/// Migrated catalog backed by a fresh SQLite file. Keep the `TempDir` alive
/// for the duration of the test.
pub async fn setup(policy: DeletePolicy) -> (TempDir, Catalog) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("catalog.db").display());
    let config = Config::for_url(url, policy);

    db::migrate(&config.direct_url).await.unwrap();
    let catalog = db::open(&config).await.unwrap();
    (dir, catalog)
}

pub fn shawshank() -> NewMovie {
    NewMovie {
        id: "tt0111161".to_string(),
        title: "The Shawshank Redemption".to_string(),
        year: 1994,
        genre: "Drama".to_string(),
        poster: "https://m.media-amazon.com/images/M/shawshank.jpg".to_string(),
        critic_rating: Some(9.3),
    }
}

pub fn godfather() -> NewMovie {
    NewMovie {
        id: "tt0068646".to_string(),
        title: "The Godfather".to_string(),
        year: 1972,
        genre: "Crime, Drama".to_string(),
        poster: "https://m.media-amazon.com/images/M/godfather.jpg".to_string(),
        critic_rating: None,
    }
}

pub fn review(id: i32, movie_id: &str) -> NewReview {
    NewReview {
        id,
        movie_id: movie_id.to_string(),
        reviewer: format!("critic{id}"),
        rating: Some(8),
        link: format!("https://letterboxd.com/critic{id}/film/review/"),
        text: "Hope is a good thing.".to_string(),
    }
}

pub fn worker(name: &str) -> NewWorker {
    NewWorker {
        name: name.to_string(),
        link: format!("https://en.wikipedia.org/wiki/{}", name.replace(' ', "_")),
    }
}

pub fn crew(movie_id: &str, worker_id: i32, role: &str) -> NewCrewMember {
    NewCrewMember { movie_id: movie_id.to_string(), worker_id, role: role.to_string() }
}

mod common;

use common::{crew, godfather, review, setup, shawshank, worker};
use movie_catalog::{Catalog, CatalogError, DeletePolicy};
use sea_orm::ConnectionTrait;

/// Shawshank with three reviews and two crew members.
async fn seed(catalog: &Catalog) -> (i32, i32) {
    catalog.create_movie(shawshank()).await.unwrap();
    for id in [101, 102, 103] {
        catalog.create_review(review(id, "tt0111161")).await.unwrap();
    }
    let frank = catalog.create_worker(worker("Frank Darabont")).await.unwrap();
    let tim = catalog.create_worker(worker("Tim Robbins")).await.unwrap();
    catalog.create_crew_member(crew("tt0111161", frank.id, "Director")).await.unwrap();
    catalog.create_crew_member(crew("tt0111161", tim.id, "Actor")).await.unwrap();
    (frank.id, tim.id)
}

#[tokio::test]
async fn cascade_removes_reviews_and_crew_with_the_movie() {
    let (_dir, catalog) = setup(DeletePolicy::Cascade).await;
    let (frank, tim) = seed(&catalog).await;

    catalog.delete_movie("tt0111161").await.unwrap();

    assert!(matches!(catalog.get_movie("tt0111161").await, Err(CatalogError::NotFound { .. })));
    for id in [101, 102, 103] {
        assert!(matches!(catalog.get_review(id).await, Err(CatalogError::NotFound { .. })));
    }
    assert!(catalog.list_crew_for_movie("tt0111161").await.unwrap().is_empty());

    // Workers are owned independently of movies.
    catalog.get_worker(frank).await.unwrap();
    catalog.get_worker(tim).await.unwrap();

    let stats = catalog.stats().await.unwrap();
    assert_eq!((stats.movies, stats.reviews, stats.crew_members, stats.workers), (0, 0, 0, 2));
}

#[tokio::test]
async fn failed_cascade_keeps_reviews_and_crew() {
    let (_dir, catalog) = setup(DeletePolicy::Cascade).await;
    seed(&catalog).await;

    // Rejects the parent delete after the children are already gone inside
    // the cascade transaction.
    catalog
        .db()
        .execute_unprepared(
            "CREATE TRIGGER keep_movies BEFORE DELETE ON Movie \
             BEGIN SELECT RAISE(ABORT, 'movie is locked'); END",
        )
        .await
        .unwrap();

    let err = catalog.delete_movie("tt0111161").await.unwrap_err();
    assert!(matches!(err, CatalogError::Store(_)), "{err:?}");

    let stats = catalog.stats().await.unwrap();
    assert_eq!((stats.movies, stats.reviews, stats.crew_members), (1, 3, 2));
    for id in [101, 102, 103] {
        catalog.get_review(id).await.unwrap();
    }
    assert_eq!(catalog.list_crew_for_movie("tt0111161").await.unwrap().len(), 2);
}

#[tokio::test]
async fn restrict_refuses_while_dependents_exist() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;
    seed(&catalog).await;

    let err = catalog.delete_movie("tt0111161").await.unwrap_err();
    assert!(matches!(err, CatalogError::HasDependents { entity: "Movie", .. }), "{err:?}");

    let stats = catalog.stats().await.unwrap();
    assert_eq!((stats.movies, stats.reviews, stats.crew_members), (1, 3, 2));
}

#[tokio::test]
async fn restrict_deletes_a_movie_once_children_are_gone() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;
    catalog.create_movie(godfather()).await.unwrap();
    catalog.create_review(review(1, "tt0068646")).await.unwrap();

    assert!(matches!(
        catalog.delete_movie("tt0068646").await,
        Err(CatalogError::HasDependents { .. })
    ));

    catalog.delete_review(1).await.unwrap();
    catalog.delete_movie("tt0068646").await.unwrap();
    assert!(matches!(catalog.get_movie("tt0068646").await, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn deleting_a_missing_movie_is_not_found_under_either_policy() {
    for policy in [DeletePolicy::Restrict, DeletePolicy::Cascade] {
        let (_dir, catalog) = setup(policy).await;
        assert!(
            matches!(catalog.delete_movie("tt0000000").await, Err(CatalogError::NotFound { .. })),
            "{policy}"
        );
        assert!(
            matches!(catalog.delete_worker(42).await, Err(CatalogError::NotFound { .. })),
            "{policy}"
        );
    }
}

#[tokio::test]
async fn worker_delete_follows_the_policy() {
    let (_dir, restrict) = setup(DeletePolicy::Restrict).await;
    let (frank, _) = seed(&restrict).await;

    let err = restrict.delete_worker(frank).await.unwrap_err();
    assert!(matches!(err, CatalogError::HasDependents { entity: "Worker", .. }), "{err:?}");
    restrict.get_worker(frank).await.unwrap();

    let (_dir, cascade) = setup(DeletePolicy::Cascade).await;
    let (frank, tim) = seed(&cascade).await;

    cascade.delete_worker(frank).await.unwrap();

    assert!(matches!(cascade.get_worker(frank).await, Err(CatalogError::NotFound { .. })));
    let remaining: Vec<i32> = cascade
        .list_crew_for_movie("tt0111161")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.worker.id)
        .collect();
    assert_eq!(remaining, vec![tim]);
    cascade.get_movie("tt0111161").await.unwrap();
}

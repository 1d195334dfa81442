mod common;

use common::{review, setup, shawshank};
use movie_catalog::{CatalogError, DeletePolicy, models::ReviewPatch};

#[tokio::test]
async fn review_for_missing_movie_is_rejected() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;

    let err = catalog.create_review(review(1, "tt9999999")).await.unwrap_err();
    assert!(matches!(err, CatalogError::ReferenceNotFound { entity: "Review", .. }), "{err:?}");
    assert_eq!(catalog.stats().await.unwrap().reviews, 0);
}

#[tokio::test]
async fn duplicate_review_id_is_rejected() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;
    catalog.create_movie(shawshank()).await.unwrap();
    catalog.create_review(review(1, "tt0111161")).await.unwrap();

    let err = catalog.create_review(review(1, "tt0111161")).await.unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateKey { .. }), "{err:?}");
}

#[tokio::test]
async fn reviews_are_listed_per_movie() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;
    catalog.create_movie(shawshank()).await.unwrap();

    assert!(catalog.list_reviews_for_movie("tt0111161").await.unwrap().is_empty());

    for id in [30, 10, 20] {
        catalog.create_review(review(id, "tt0111161")).await.unwrap();
    }

    let ids: Vec<i32> = catalog
        .list_reviews_for_movie("tt0111161")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![10, 20, 30]);

    assert!(catalog.list_reviews_for_movie("tt0000000").await.unwrap().is_empty());
}

#[tokio::test]
async fn review_corrections_keep_the_movie() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;
    catalog.create_movie(shawshank()).await.unwrap();
    catalog.create_review(review(7, "tt0111161")).await.unwrap();

    let patch = ReviewPatch {
        rating: Some(None),
        text: Some("Get busy living.".to_string()),
        ..Default::default()
    };
    let updated = catalog.update_review(7, patch).await.unwrap();

    assert_eq!(updated.movie_id, "tt0111161");
    assert_eq!(updated.rating, None);
    assert_eq!(updated.text, "Get busy living.");
    assert_eq!(updated.reviewer, "critic7");

    let patch = ReviewPatch { reviewer: Some("someone".to_string()), ..Default::default() };
    assert!(matches!(catalog.update_review(8, patch).await, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn review_delete_is_unconditional_but_keyed() {
    let (_dir, catalog) = setup(DeletePolicy::Restrict).await;
    catalog.create_movie(shawshank()).await.unwrap();
    catalog.create_review(review(1, "tt0111161")).await.unwrap();
    catalog.create_review(review(2, "tt0111161")).await.unwrap();

    catalog.delete_review(1).await.unwrap();

    assert!(matches!(catalog.get_review(1).await, Err(CatalogError::NotFound { .. })));
    assert_eq!(catalog.get_review(2).await.unwrap().id, 2);
    assert!(matches!(catalog.delete_review(1).await, Err(CatalogError::NotFound { .. })));
}

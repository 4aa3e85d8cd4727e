use super::*;

/// Tests listing reviews with reviewer and images attached.
///
/// Expected: Ok with the reviewer populated and images in id order
#[tokio::test]
async fn returns_reviews_with_user_and_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    let review = factory::review::ReviewFactory::new(db, spot.id, guest.id)
        .build()
        .await?;
    factory::review_image::create_review_image(db, review.id, "https://img.test/r1.jpg").await?;
    factory::review_image::create_review_image(db, review.id, "https://img.test/r2.jpg").await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.list_with_relations(spot.id).await?;

    assert_eq!(reviews.len(), 1);
    let entry = &reviews[0];
    assert_eq!(entry.review.id, review.id);
    assert_eq!(entry.user.as_ref().unwrap().id, guest.id);
    assert_eq!(entry.images.len(), 2);
    assert_eq!(entry.images[0].url, "https://img.test/r1.jpg");
    assert_eq!(entry.images[1].url, "https://img.test/r2.jpg");

    Ok(())
}

/// Tests that reviews of other spots are excluded.
///
/// Expected: Ok with only the requested spot's reviews
#[tokio::test]
async fn excludes_other_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, other_spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    let mine = factory::review::ReviewFactory::new(db, spot.id, guest.id)
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, other_spot.id, guest.id)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.list_with_relations(spot.id).await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].review.id, mine.id);

    Ok(())
}

/// Tests listing reviews for a spot that has none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.list_with_relations(spot.id).await?;

    assert!(reviews.is_empty());

    Ok(())
}

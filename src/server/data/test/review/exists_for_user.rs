use super::*;

/// Tests the duplicate-review check when a review exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_when_user_reviewed_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    factory::review::ReviewFactory::new(db, spot.id, guest.id)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    assert!(repo.exists_for_user(spot.id, guest.id).await?);

    Ok(())
}

/// Tests the duplicate-review check against other users and other spots.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn false_for_other_user_or_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, other_spot) = factory::helpers::create_owner_and_spot(db).await?;
    let reviewer = factory::helpers::create_guest(db).await?;
    let other_user = factory::helpers::create_guest(db).await?;
    factory::review::ReviewFactory::new(db, spot.id, reviewer.id)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    assert!(!repo.exists_for_user(spot.id, other_user.id).await?);
    assert!(!repo.exists_for_user(other_spot.id, reviewer.id).await?);

    Ok(())
}

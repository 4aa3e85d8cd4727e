use super::*;

/// Tests deleting a spot with every kind of dependent row.
///
/// Verifies that the spot's images, reviews, review images, and bookings are
/// all removed together with the spot.
///
/// Expected: Ok with no rows left referencing the spot
#[tokio::test]
async fn removes_spot_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;

    factory::spot_image::create_spot_image(db, spot.id, "https://img.test/1.jpg", true).await?;
    let review = factory::review::ReviewFactory::new(db, spot.id, guest.id)
        .build()
        .await?;
    factory::review_image::create_review_image(db, review.id, "https://img.test/r1.jpg").await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .build()
        .await?;

    let repo = SpotRepository::new(db);
    repo.delete_cascade(spot.id).await?;

    assert!(entity::prelude::Spot::find_by_id(spot.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::SpotImage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ReviewImage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the cascade only touches the targeted spot.
///
/// Expected: Ok with the other spot's rows intact
#[tokio::test]
async fn leaves_other_spots_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, doomed) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, survivor) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;

    factory::spot_image::create_spot_image(db, survivor.id, "https://img.test/s.jpg", true)
        .await?;
    factory::review::ReviewFactory::new(db, survivor.id, guest.id)
        .build()
        .await?;

    let repo = SpotRepository::new(db);
    repo.delete_cascade(doomed.id).await?;

    assert!(entity::prelude::Spot::find_by_id(survivor.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::SpotImage::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 1);

    Ok(())
}

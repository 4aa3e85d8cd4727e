use super::*;

/// Tests listing bookings for one spot.
///
/// Expected: Ok with only that spot's bookings, id ordered
#[tokio::test]
async fn returns_spot_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, other_spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;

    let first = factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 1, 10), date(2024, 1, 15))
        .build()
        .await?;
    let second = factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 2, 1), date(2024, 2, 5))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, other_spot.id, guest.id)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.list_for_spot(spot.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, first.id);
    assert_eq!(bookings[1].id, second.id);

    Ok(())
}

/// Tests listing for a spot with no bookings.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.list_for_spot(spot.id).await?;

    assert!(bookings.is_empty());

    Ok(())
}

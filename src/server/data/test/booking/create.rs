use super::*;

/// Tests booking free dates.
///
/// Expected: Ok(Created) with the booking stored
#[tokio::test]
async fn books_free_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;

    let repo = BookingRepository::new(db);
    let attempt = repo
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: guest.id,
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 15),
        })
        .await?;

    let BookingAttempt::Created(booking) = attempt else {
        panic!("expected booking to be created");
    };
    assert_eq!(booking.spot_id, spot.id);
    assert_eq!(booking.user_id, guest.id);
    assert_eq!(booking.start_date, date(2024, 1, 10));
    assert_eq!(booking.end_date, date(2024, 1, 15));

    Ok(())
}

/// Tests a request intersecting an existing booking's interior.
///
/// With bookings on Jan 10-15 and Feb 1-5, a request for Jan 14-20 crosses
/// the first booking.
///
/// Expected: Ok(Overlapping), nothing written
#[tokio::test]
async fn rejects_interior_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 1, 10), date(2024, 1, 15))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 2, 1), date(2024, 2, 5))
        .build()
        .await?;

    let other = factory::helpers::create_guest(db).await?;
    let repo = BookingRepository::new(db);
    let attempt = repo
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: other.id,
            start_date: date(2024, 1, 14),
            end_date: date(2024, 1, 20),
        })
        .await?;

    assert!(matches!(attempt, BookingAttempt::Overlapping));
    assert_eq!(repo.list_for_spot(spot.id).await?.len(), 2);

    Ok(())
}

/// Tests a request starting exactly on an existing end date.
///
/// Bounds are inclusive, so Jan 15-20 collides with a booking ending Jan 15.
///
/// Expected: Ok(Overlapping)
#[tokio::test]
async fn rejects_touching_endpoint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 1, 10), date(2024, 1, 15))
        .build()
        .await?;

    let other = factory::helpers::create_guest(db).await?;
    let repo = BookingRepository::new(db);
    let attempt = repo
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: other.id,
            start_date: date(2024, 1, 15),
            end_date: date(2024, 1, 20),
        })
        .await?;

    assert!(matches!(attempt, BookingAttempt::Overlapping));

    Ok(())
}

/// Tests a request that surrounds an existing booking.
///
/// Expected: Ok(Overlapping)
#[tokio::test]
async fn rejects_surrounding_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 1, 10), date(2024, 1, 15))
        .build()
        .await?;

    let other = factory::helpers::create_guest(db).await?;
    let repo = BookingRepository::new(db);
    let attempt = repo
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: other.id,
            start_date: date(2024, 1, 5),
            end_date: date(2024, 1, 25),
        })
        .await?;

    assert!(matches!(attempt, BookingAttempt::Overlapping));

    Ok(())
}

/// Tests a request in the gap between two bookings.
///
/// With bookings on Jan 10-15 and Feb 1-5, Jan 16-31 is free.
///
/// Expected: Ok(Created)
#[tokio::test]
async fn books_gap_between_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 1, 10), date(2024, 1, 15))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .dates(date(2024, 2, 1), date(2024, 2, 5))
        .build()
        .await?;

    let other = factory::helpers::create_guest(db).await?;
    let repo = BookingRepository::new(db);
    let attempt = repo
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: other.id,
            start_date: date(2024, 1, 16),
            end_date: date(2024, 1, 31),
        })
        .await?;

    assert!(matches!(attempt, BookingAttempt::Created(_)));

    Ok(())
}

/// Tests that bookings on another spot never conflict.
///
/// Expected: Ok(Created) despite identical dates elsewhere
#[tokio::test]
async fn ignores_other_spots_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, other_spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    factory::booking::BookingFactory::new(db, other_spot.id, guest.id)
        .dates(date(2024, 1, 10), date(2024, 1, 15))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let attempt = repo
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: guest.id,
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 15),
        })
        .await?;

    assert!(matches!(attempt, BookingAttempt::Created(_)));

    Ok(())
}

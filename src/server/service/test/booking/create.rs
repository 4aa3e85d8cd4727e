use super::*;

/// Tests booking a spot as a guest.
///
/// Expected: Ok with booking created
#[tokio::test]
async fn guest_can_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: guest.id,
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 15),
        })
        .await
        .unwrap();

    assert_eq!(booking.spot_id, spot.id);
    assert_eq!(booking.user_id, guest.id);

    Ok(())
}

/// Tests booking a missing spot.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_spot_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::helpers::create_guest(db).await?;

    let service = BookingService::new(db);
    let result = service
        .create(CreateBookingParams {
            spot_id: 999999,
            user_id: guest.id,
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 15),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the owner booking their own spot.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn owner_cannot_book_own_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, spot) = factory::helpers::create_owner_and_spot(db).await?;

    let service = BookingService::new(db);
    let result = service
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: owner.id,
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 15),
        })
        .await;

    assert!(matches!(result, Err(AppError::Forbidden)));

    Ok(())
}

/// Tests end dates on or before the start date.
///
/// Expected: Err(Validation) with the endDate message
#[tokio::test]
async fn end_on_or_before_start_fails_validation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;

    let service = BookingService::new(db);

    for (start, end) in [
        (date(2024, 1, 10), date(2024, 1, 10)),
        (date(2024, 1, 10), date(2024, 1, 5)),
    ] {
        let result = service
            .create(CreateBookingParams {
                spot_id: spot.id,
                user_id: guest.id,
                start_date: start,
                end_date: end,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation { errors, .. })
                if errors.get("endDate").map(String::as_str)
                    == Some("endDate cannot be on or before startDate")
        ));
    }

    Ok(())
}

/// Tests a date collision with an existing booking.
///
/// Expected: Err(Conflict) with the overlap message and both field errors
#[tokio::test]
async fn overlap_conflicts() -> Result<(), DbErr> {
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
    let service = BookingService::new(db);
    let result = service
        .create(CreateBookingParams {
            spot_id: spot.id,
            user_id: other.id,
            start_date: date(2024, 1, 14),
            end_date: date(2024, 1, 20),
        })
        .await;

    let Err(AppError::Conflict { message, errors }) = result else {
        panic!("expected a conflict");
    };
    assert_eq!(
        message,
        "Sorry, this spot is already booked for the specified dates"
    );
    assert!(errors.contains_key("startDate"));
    assert!(errors.contains_key("endDate"));

    Ok(())
}

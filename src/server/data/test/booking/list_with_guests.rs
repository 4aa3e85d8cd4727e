use super::*;

/// Tests the joined listing used for the owner's view.
///
/// Expected: Ok with each booking carrying its booking user
#[tokio::test]
async fn returns_bookings_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let guest = factory::helpers::create_guest(db).await?;
    let booking = factory::booking::BookingFactory::new(db, spot.id, guest.id)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.list_with_guests(spot.id).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booking.id, booking.id);
    let user = bookings[0].user.as_ref().unwrap();
    assert_eq!(user.id, guest.id);
    assert_eq!(user.first_name, guest.first_name);

    Ok(())
}

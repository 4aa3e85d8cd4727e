use super::*;

/// Tests listing spots for a specific owner.
///
/// Expected: Ok with only the owner's spots
#[tokio::test]
async fn returns_only_owned_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, _other_spot) = factory::helpers::create_owner_and_spot(db).await?;

    let repo = SpotRepository::new(db);
    let spots = repo.list_by_owner(owner.id).await?;

    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0].id, spot.id);

    Ok(())
}

/// Tests listing for a user with no spots.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_user_without_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::helpers::create_guest(db).await?;

    let repo = SpotRepository::new(db);
    let spots = repo.list_by_owner(guest.id).await?;

    assert!(spots.is_empty());

    Ok(())
}

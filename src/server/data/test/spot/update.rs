use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change while the rest keep their
/// stored values.
///
/// Expected: Ok with name and price changed, address untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let original_address = spot.address.clone();

    let repo = SpotRepository::new(db);
    let updated = repo
        .update(
            spot,
            UpdateSpotParams {
                name: Some("Renamed Spot".to_string()),
                price: Some(250.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed Spot");
    assert_eq!(updated.price, 250.0);
    assert_eq!(updated.address, original_address);

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok with every listing field unchanged
#[tokio::test]
async fn empty_update_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let original = spot.clone();

    let repo = SpotRepository::new(db);
    let updated = repo.update(spot, UpdateSpotParams::default()).await?;

    assert_eq!(updated.name, original.name);
    assert_eq!(updated.address, original.address);
    assert_eq!(updated.price, original.price);
    assert_eq!(updated.lat, original.lat);

    Ok(())
}

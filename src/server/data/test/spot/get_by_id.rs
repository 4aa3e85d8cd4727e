use super::*;

/// Tests retrieving a spot by id.
///
/// Expected: Ok(Some(spot))
#[tokio::test]
async fn returns_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;

    let repo = SpotRepository::new(db);
    let found = repo.find_by_id(spot.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, spot.id);
    assert_eq!(found.name, spot.name);

    Ok(())
}

/// Tests retrieving a non-existent spot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpotRepository::new(db);
    let found = repo.find_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}

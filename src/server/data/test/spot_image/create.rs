use super::*;

/// Tests attaching an image to a spot.
///
/// Expected: Ok with image created
#[tokio::test]
async fn creates_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;

    let repo = SpotImageRepository::new(db);
    let image = repo
        .create(spot.id, "https://img.test/front.jpg".to_string(), true)
        .await?;

    assert_eq!(image.spot_id, spot.id);
    assert_eq!(image.url, "https://img.test/front.jpg");
    assert!(image.preview);

    Ok(())
}

/// Tests foreign key constraint on spot_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpotImageRepository::new(db);
    let result = repo
        .create(999999, "https://img.test/none.jpg".to_string(), false)
        .await;

    assert!(result.is_err());

    Ok(())
}

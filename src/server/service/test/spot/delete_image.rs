use super::*;

/// Tests deleting a spot image as the spot owner.
///
/// Expected: Ok with the image gone
#[tokio::test]
async fn owner_can_delete_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let image =
        factory::spot_image::create_spot_image(db, spot.id, "https://img.test/x.jpg", true)
            .await?;

    let service = SpotService::new(db);
    service
        .delete_image(owner.id, spot.id, image.id)
        .await
        .unwrap();

    assert!(entity::prelude::SpotImage::find_by_id(image.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a missing image is reported before the ownership check.
///
/// A non-owner probing a nonexistent image id learns only that the image is
/// missing.
///
/// Expected: Err(NotFound) with the image message
#[tokio::test]
async fn missing_image_reported_before_forbidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let intruder = factory::helpers::create_guest(db).await?;

    let service = SpotService::new(db);
    let result = service.delete_image(intruder.id, spot.id, 999999).await;

    assert!(
        matches!(result, Err(AppError::NotFound(msg)) if msg == "Spot Image couldn't be found")
    );

    Ok(())
}

/// Tests that an image belonging to another spot counts as missing.
///
/// Expected: Err(NotFound) with the image message
#[tokio::test]
async fn image_of_other_spot_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let (_other_owner, other_spot) = factory::helpers::create_owner_and_spot(db).await?;
    let stray =
        factory::spot_image::create_spot_image(db, other_spot.id, "https://img.test/y.jpg", true)
            .await?;

    let service = SpotService::new(db);
    let result = service.delete_image(owner.id, spot.id, stray.id).await;

    assert!(
        matches!(result, Err(AppError::NotFound(msg)) if msg == "Spot Image couldn't be found")
    );

    Ok(())
}

/// Tests deleting an image as a non-owner when the image exists.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn non_owner_is_forbidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
    let image =
        factory::spot_image::create_spot_image(db, spot.id, "https://img.test/x.jpg", true)
            .await?;
    let intruder = factory::helpers::create_guest(db).await?;

    let service = SpotService::new(db);
    let result = service.delete_image(intruder.id, spot.id, image.id).await;

    assert!(matches!(result, Err(AppError::Forbidden)));

    Ok(())
}

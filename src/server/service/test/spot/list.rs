use super::*;

/// Tests the public listing aggregates.
///
/// Verifies that each listed spot carries its rounded average rating and
/// preview image url, with None for spots lacking either.
///
/// Expected: Ok with aggregates per spot
#[tokio::test]
async fn attaches_rating_and_preview_to_each_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::helpers::create_guest(db).await?;
    let rated = factory::spot::SpotFactory::new(db, owner.id).build().await?;
    let bare = factory::spot::SpotFactory::new(db, owner.id).build().await?;

    let first = factory::helpers::create_guest(db).await?;
    let second = factory::helpers::create_guest(db).await?;
    factory::review::ReviewFactory::new(db, rated.id, first.id)
        .stars(4)
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, rated.id, second.id)
        .stars(5)
        .build()
        .await?;
    factory::spot_image::create_spot_image(db, rated.id, "https://img.test/p.jpg", true).await?;

    let service = SpotService::new(db);
    let result = service
        .list(&SpotFilter::default(), Page::clamped(None, None))
        .await
        .unwrap();

    assert_eq!(result.page, 1);
    assert_eq!(result.size, 20);
    assert_eq!(result.spots.len(), 2);

    let with_rating = result
        .spots
        .iter()
        .find(|s| s.spot.id == rated.id)
        .unwrap();
    assert_eq!(with_rating.avg_rating, Some(4.5));
    assert_eq!(
        with_rating.preview_image,
        Some("https://img.test/p.jpg".to_string())
    );

    let without = result.spots.iter().find(|s| s.spot.id == bare.id).unwrap();
    assert_eq!(without.avg_rating, None);
    assert_eq!(without.preview_image, None);

    Ok(())
}

/// Tests that the resolved pagination values are echoed back.
///
/// Expected: Ok with out-of-range inputs reset to defaults
#[tokio::test]
async fn echoes_clamped_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spot_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SpotService::new(db);
    let result = service
        .list(&SpotFilter::default(), Page::clamped(Some(11), Some(25)))
        .await
        .unwrap();

    assert_eq!(result.page, 1);
    assert_eq!(result.size, 20);

    Ok(())
}

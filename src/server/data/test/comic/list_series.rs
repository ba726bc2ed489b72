use super::*;

/// Tests listing series on an empty store.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_series_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.list_series().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that listing is ordered by most recent update.
///
/// Expected: Ok(vec) newest first
#[tokio::test]
async fn orders_by_updated_at_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_series_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = factory::series::SeriesFactory::new(db)
        .updated_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::series::SeriesFactory::new(db)
        .updated_at(now)
        .build()
        .await?;
    let middle = factory::series::SeriesFactory::new(db)
        .updated_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.list_series().await?;

    let ids: Vec<Uuid> = result.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, old.id]);

    Ok(())
}

/// Tests that listing is capped and excludes nested trees.
///
/// Expected: Ok(vec) with exactly LIST_SERIES_LIMIT entries, no seasons
#[tokio::test]
async fn caps_results_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for i in 0..(LIST_SERIES_LIMIT as i64 + 5) {
        let series = factory::series::SeriesFactory::new(db)
            .updated_at(now - Duration::minutes(i))
            .build()
            .await?;
        factory::create_season(db, series.id).await?;
    }

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.list_series().await?;

    assert_eq!(result.len(), LIST_SERIES_LIMIT as usize);
    assert!(result.iter().all(|s| s.seasons.is_empty()));
    assert!(result
        .windows(2)
        .all(|pair| pair[0].updated_at >= pair[1].updated_at));

    Ok(())
}

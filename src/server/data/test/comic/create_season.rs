use super::*;

/// Tests adding a season to an existing series.
///
/// Expected: Ok(season) persisted with the given number
#[tokio::test]
async fn creates_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;

    let repo = ComicRepositoryImpl::new(db);
    let season = repo
        .create_season(Season {
            id: Uuid::new_v4(),
            series_id: series.id,
            season_number: 3,
            title: "Arc Three".to_string(),
            chapters: Vec::new(),
        })
        .await?;

    let stored = entity::prelude::Season::find_by_id(season.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.series_id, series.id);
    assert_eq!(stored.season_number, 3);
    assert_eq!(stored.title, "Arc Three");

    Ok(())
}

/// Tests adding a season to a series that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let result = repo
        .create_season(Season {
            id: Uuid::new_v4(),
            series_id: Uuid::new_v4(),
            season_number: 1,
            title: String::new(),
            chapters: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

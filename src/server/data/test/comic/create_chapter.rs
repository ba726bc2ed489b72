use super::*;

/// Tests adding a published chapter to a season.
///
/// Expected: Ok(chapter) with status and publish time stored
#[tokio::test]
async fn creates_chapter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;
    let season = factory::create_season(db, series.id).await?;
    let published_at = Utc::now();

    let repo = ComicRepositoryImpl::new(db);
    let chapter = repo
        .create_chapter(Chapter {
            id: Uuid::new_v4(),
            season_id: season.id,
            chapter_number: 7,
            title: "The Return".to_string(),
            status: ChapterStatus::Published,
            published_at: Some(published_at),
            images: Vec::new(),
        })
        .await?;

    assert_eq!(chapter.chapter_number, 7);
    assert_eq!(chapter.status, ChapterStatus::Published);
    assert!(chapter.published_at.is_some());

    Ok(())
}

/// Tests adding a chapter to a season that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let result = repo
        .create_chapter(Chapter {
            id: Uuid::new_v4(),
            season_id: Uuid::new_v4(),
            chapter_number: 1,
            title: String::new(),
            status: ChapterStatus::Draft,
            published_at: None,
            images: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

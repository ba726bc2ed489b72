use super::*;

/// Tests retrieving a series with its season and chapter index.
///
/// Seasons and chapters are inserted out of order to verify sorting by number.
///
/// Expected: Ok(Some(series)) with ordered seasons and chapters and no images
#[tokio::test]
async fn returns_series_with_ordered_seasons_and_chapters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;
    let season_two = factory::season::SeasonFactory::new(db, series.id)
        .season_number(2)
        .build()
        .await?;
    let season_one = factory::season::SeasonFactory::new(db, series.id)
        .season_number(1)
        .build()
        .await?;
    let chapter_two = factory::chapter::ChapterFactory::new(db, season_one.id)
        .chapter_number(2)
        .build()
        .await?;
    let chapter_one = factory::chapter::ChapterFactory::new(db, season_one.id)
        .chapter_number(1)
        .build()
        .await?;
    factory::create_chapter_image(db, chapter_one.id).await?;

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.get_series_by_id(series.id).await?.unwrap();

    assert_eq!(result.id, series.id);
    assert_eq!(result.seasons.len(), 2);
    assert_eq!(result.seasons[0].id, season_one.id);
    assert_eq!(result.seasons[1].id, season_two.id);
    assert!(result.seasons[1].chapters.is_empty());

    let chapters = &result.seasons[0].chapters;
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].id, chapter_one.id);
    assert_eq!(chapters[1].id, chapter_two.id);
    assert!(chapters.iter().all(|c| c.images.is_empty()));

    Ok(())
}

/// Tests that linked tags are returned with their translations.
///
/// Expected: Ok(Some(series)) with one tag carrying two translations
#[tokio::test]
async fn returns_series_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;
    let tag = factory::tag::TagFactory::new(db)
        .slug("Horror")
        .translation("th", "สยองขวัญ")
        .build()
        .await?;
    factory::tag::attach_tag(db, series.id, tag.id).await?;
    // Unlinked tag must not show up
    factory::create_tag(db).await?;

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.get_series_by_id(series.id).await?.unwrap();

    assert_eq!(result.tags.len(), 1);
    assert_eq!(result.tags[0].slug, "Horror");
    assert_eq!(result.tags[0].translations.len(), 2);

    Ok(())
}

/// Tests retrieving a series that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.get_series_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}

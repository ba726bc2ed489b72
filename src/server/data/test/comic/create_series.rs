use super::*;

/// Tests creating a series with tags.
///
/// Verifies that the series row, every tag, both tag translations per tag and
/// the join rows are all written.
///
/// Expected: Ok with 1 series, 2 tags, 4 tag translations, 2 links
#[tokio::test]
async fn creates_series_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_series_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let series = new_series("Test Series", &["Action", "Romance"]);
    let created = repo.create_series(series.clone()).await?;

    assert_eq!(created, series);
    assert_eq!(entity::prelude::Series::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);
    assert_eq!(entity::prelude::TagTranslation::find().count(db).await?, 4);
    assert_eq!(entity::prelude::SeriesTag::find().count(db).await?, 2);

    let stored = entity::prelude::Series::find_by_id(series.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, MultilingualText::new("Test Series", ""));
    assert_eq!(stored.genres.0, vec!["action", "drama"]);

    Ok(())
}

/// Tests that identical tag text yields separate tag rows.
///
/// Verifies that two series created with the same tag label each get their
/// own tag identity with the same slug.
///
/// Expected: Ok with 2 tags sharing a slug
#[tokio::test]
async fn mints_new_tags_for_identical_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_series_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let first = repo.create_series(new_series("First", &["Action"])).await?;
    let second = repo.create_series(new_series("Second", &["Action"])).await?;

    assert_ne!(first.tags[0].id, second.tags[0].id);
    let tags = entity::prelude::Tag::find().all(db).await?;
    assert_eq!(tags.len(), 2);
    assert!(tags.iter().all(|t| t.slug == "Action"));

    Ok(())
}

/// Tests that a failed tag insert leaves nothing behind.
///
/// Reuses a tag identity already stored by another series so the second
/// creation fails on the primary key after its series row was written.
///
/// Expected: Err(DbErr) and only the first series persisted
#[tokio::test]
async fn rolls_back_on_tag_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_series_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let first = repo.create_series(new_series("First", &["Action"])).await?;

    let mut second = new_series("Second", &[]);
    second.tags = first.tags.clone();
    let result = repo.create_series(second.clone()).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Series::find().count(db).await?, 1);
    assert!(entity::prelude::Series::find_by_id(second.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests creating a series without tags.
///
/// Expected: Ok with no tag rows
#[tokio::test]
async fn creates_series_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_series_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let created = repo.create_series(new_series("Lonely", &[])).await?;

    assert!(created.tags.is_empty());
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 0);

    Ok(())
}

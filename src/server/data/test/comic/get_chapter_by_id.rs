use super::*;

/// Tests retrieving a chapter with its full overlay tree.
///
/// Images are inserted out of order to verify sorting by display order.
///
/// Expected: Ok(Some(chapter)) with images → text layers → translations
#[tokio::test]
async fn returns_chapter_with_full_tree() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, chapter) =
        factory::helpers::create_chapter_with_dependencies(db).await?;
    let page_two = factory::chapter_image::ChapterImageFactory::new(db, chapter.id)
        .display_order(2)
        .build()
        .await?;
    let page_one = factory::chapter_image::ChapterImageFactory::new(db, chapter.id)
        .display_order(1)
        .build()
        .await?;
    let layer = factory::create_text_layer(db, page_one.id).await?;
    factory::create_translation(db, layer.id, "th").await?;
    factory::create_translation(db, layer.id, "en").await?;

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.get_chapter_by_id(chapter.id).await?.unwrap();

    assert_eq!(result.id, chapter.id);
    assert_eq!(result.images.len(), 2);
    assert_eq!(result.images[0].id, page_one.id);
    assert_eq!(result.images[1].id, page_two.id);
    assert!(result.images[1].text_layers.is_empty());

    let layers = &result.images[0].text_layers;
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].id, layer.id);
    assert_eq!(layers[0].translations.len(), 2);

    Ok(())
}

/// Tests retrieving a chapter with no images.
///
/// Expected: Ok(Some(chapter)) with an empty image list
#[tokio::test]
async fn returns_chapter_without_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, chapter) =
        factory::helpers::create_chapter_with_dependencies(db).await?;

    let repo = ComicRepositoryImpl::new(db);
    let result = repo.get_chapter_by_id(chapter.id).await?.unwrap();

    assert_eq!(result.status, ChapterStatus::Draft);
    assert!(result.images.is_empty());

    Ok(())
}

/// Tests retrieving a chapter that does not exist.
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
    let result = repo.get_chapter_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}

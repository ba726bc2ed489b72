use super::*;

/// Tests registering a page image on a chapter.
///
/// Expected: Ok(image) with URL and display order stored
#[tokio::test]
async fn creates_chapter_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, chapter) =
        factory::helpers::create_chapter_with_dependencies(db).await?;

    let repo = ComicRepositoryImpl::new(db);
    let image = repo
        .create_chapter_image(ChapterImage {
            id: Uuid::new_v4(),
            chapter_id: chapter.id,
            image_url: "https://cdn.example.com/p1.png".to_string(),
            display_order: 1,
            text_layers: Vec::new(),
        })
        .await?;

    let stored = entity::prelude::ChapterImage::find_by_id(image.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.chapter_id, chapter.id);
    assert_eq!(stored.image_url, "https://cdn.example.com/p1.png");
    assert_eq!(stored.display_order, 1);

    Ok(())
}

/// Tests registering an image on a chapter that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_chapter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComicRepositoryImpl::new(db);
    let result = repo
        .create_chapter_image(ChapterImage {
            id: Uuid::new_v4(),
            chapter_id: Uuid::new_v4(),
            image_url: String::new(),
            display_order: 1,
            text_layers: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

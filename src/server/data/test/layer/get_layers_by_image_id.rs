use super::*;

/// Tests listing the layers of an image together with their translations.
///
/// A layer on a different image must not be returned.
///
/// Expected: Ok(vec) with 2 layers, translations attached to the right one
#[tokio::test]
async fn returns_layers_with_translations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, chapter, image) =
        factory::helpers::create_image_with_dependencies(db).await?;
    let other_image = factory::create_chapter_image(db, chapter.id).await?;

    let translated = factory::create_text_layer(db, image.id).await?;
    let untranslated = factory::create_text_layer(db, image.id).await?;
    factory::create_text_layer(db, other_image.id).await?;
    factory::create_translation(db, translated.id, "th").await?;

    let repo = LayerRepositoryImpl::new(db);
    let layers = repo.get_layers_by_image_id(image.id).await?;

    assert_eq!(layers.len(), 2);
    let first = layers.iter().find(|l| l.id == translated.id).unwrap();
    let second = layers.iter().find(|l| l.id == untranslated.id).unwrap();
    assert_eq!(first.translations.len(), 1);
    assert_eq!(first.translations[0].language_code, "th");
    assert!(second.translations.is_empty());

    Ok(())
}

/// Tests listing layers of an image without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_bare_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, _chapter, image) =
        factory::helpers::create_image_with_dependencies(db).await?;

    let repo = LayerRepositoryImpl::new(db);
    let layers = repo.get_layers_by_image_id(image.id).await?;

    assert!(layers.is_empty());

    Ok(())
}

use super::*;

/// Tests finding an existing layer.
///
/// Expected: Ok(Some(layer)) with the stored original text
#[tokio::test]
async fn returns_layer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, _chapter, image) =
        factory::helpers::create_image_with_dependencies(db).await?;
    let layer = factory::text_layer::TextLayerFactory::new(db, image.id)
        .original_text("Where am I?")
        .build()
        .await?;

    let repo = LayerRepositoryImpl::new(db);
    let found = repo.find_layer(layer.id).await?.unwrap();

    assert_eq!(found.original_text, "Where am I?");

    Ok(())
}

/// Tests finding a layer that does not exist.
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

    let repo = LayerRepositoryImpl::new(db);

    assert!(repo.find_layer(Uuid::new_v4()).await?.is_none());

    Ok(())
}

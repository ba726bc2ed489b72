use super::*;

/// Tests that repeated translations for one language are appended.
///
/// Expected: Ok for both inserts and 2 stored rows for the layer
#[tokio::test]
async fn appends_translation_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, _chapter, image) =
        factory::helpers::create_image_with_dependencies(db).await?;
    let layer = factory::create_text_layer(db, image.id).await?;

    let repo = LayerRepositoryImpl::new(db);
    let first = repo.create_translation(new_translation(layer.id, "th")).await?;
    let second = repo.create_translation(new_translation(layer.id, "th")).await?;

    assert_ne!(first.id, second.id);
    assert!(first.is_machine_translated);
    assert!(!first.verified);
    let layers = repo.get_layers_by_image_id(image.id).await?;
    assert_eq!(layers[0].translations.len(), 2);

    Ok(())
}

/// Tests translating a layer that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_layer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LayerRepositoryImpl::new(db);
    let result = repo
        .create_translation(new_translation(Uuid::new_v4(), "th"))
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests placing a layer with a style payload on an existing image.
///
/// Expected: Ok(layer) with style payload stored unchanged
#[tokio::test]
async fn creates_layer_with_style() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_series, _season, _chapter, image) =
        factory::helpers::create_image_with_dependencies(db).await?;

    let style = serde_json::json!({"font": "Comic Neue", "size": 14, "color": "#000000"});
    let mut layer = new_layer(image.id, "BOOM");
    layer.layer_type = TextLayerType::Sfx;
    layer.style_json = Some(style.clone());

    let repo = LayerRepositoryImpl::new(db);
    let created = repo.create_layer(layer.clone()).await?;

    assert_eq!(created, layer);
    let stored = entity::prelude::TextLayer::find_by_id(layer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.style_json, Some(style));
    assert_eq!(stored.layer_type, TextLayerType::Sfx);

    Ok(())
}

/// Tests placing a layer on an image that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LayerRepositoryImpl::new(db);
    let result = repo.create_layer(new_layer(Uuid::new_v4(), "Hello")).await;

    assert!(result.is_err());

    Ok(())
}

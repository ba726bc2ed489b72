use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        layer::{CreateTextLayerDto, TextLayerDto, TranslateLayerDto, TranslationDto},
    },
    server::{
        data::layer::LayerRepositoryImpl,
        error::AppError,
        middleware::{
            auth::CreatorAccess,
            extract::{ApiJson, ApiPath},
        },
        model::layer::{CreateTextLayerParams, TextLayer},
        service::layer::LayerService,
        state::AppState,
    },
};

/// Tag for grouping text layer endpoints in OpenAPI documentation
pub static LAYER_TAG: &str = "layer";

/// Get the text layers of a page image.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Layers with their translations (possibly empty)
/// - `400 Bad Request` - Malformed image ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/images/{id}/layers",
    tag = LAYER_TAG,
    params(
        ("id" = Uuid, Path, description = "Chapter image ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved layers", body = Vec<TextLayerDto>),
        (status = 400, description = "Malformed image ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_layers_by_image(
    State(state): State<AppState>,
    ApiPath(image_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = LayerService::new(LayerRepositoryImpl::new(&state.db), state.translator.clone());

    let layers = service.get_layers_by_image(image_id).await?;

    let dtos: Vec<TextLayerDto> = layers.into_iter().map(TextLayer::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Place a text layer on a page image.
///
/// # Access Control
/// - `Creator` or `Admin`
///
/// # Returns
/// - `201 Created` - Successfully created layer
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
/// - `500 Internal Server Error` - Database error, including an unknown image
#[utoipa::path(
    post,
    path = "/api/creator/layers",
    tag = LAYER_TAG,
    request_body = CreateTextLayerDto,
    responses(
        (status = 201, description = "Successfully created layer", body = TextLayerDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller lacks the creator role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_layer(
    State(state): State<AppState>,
    _: CreatorAccess,
    ApiJson(payload): ApiJson<CreateTextLayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LayerService::new(LayerRepositoryImpl::new(&state.db), state.translator.clone());

    let layer = service
        .add_layer(CreateTextLayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(layer.into_dto())))
}

/// Machine-translate a text layer.
///
/// Every call stores a new unverified translation row for the target language.
///
/// # Access Control
/// - `Creator` or `Admin`
///
/// # Returns
/// - `200 OK` - The new translation
/// - `400 Bad Request` - Malformed layer ID
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
/// - `500 Internal Server Error` - Provider or database error, including an unknown layer
#[utoipa::path(
    post,
    path = "/api/creator/layers/{id}/translate",
    tag = LAYER_TAG,
    params(
        ("id" = Uuid, Path, description = "Text layer ID")
    ),
    request_body = TranslateLayerDto,
    responses(
        (status = 200, description = "Successfully translated layer", body = TranslationDto),
        (status = 400, description = "Malformed layer ID", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller lacks the creator role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn translate_layer(
    State(state): State<AppState>,
    _: CreatorAccess,
    ApiPath(layer_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<TranslateLayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LayerService::new(LayerRepositoryImpl::new(&state.db), state.translator.clone());

    let translation = service
        .translate_layer(layer_id, &payload.target_lang)
        .await?;

    Ok((StatusCode::OK, Json(translation.into_dto())))
}

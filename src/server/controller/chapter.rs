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
        chapter::{ChapterDto, ChapterImageDto, CreateChapterDto, CreateChapterImageDto},
    },
    server::{
        data::comic::ComicRepositoryImpl,
        error::AppError,
        middleware::{
            auth::CreatorAccess,
            extract::{ApiJson, ApiPath},
        },
        model::chapter::{CreateChapterImageParams, CreateChapterParams},
        service::comic::ComicService,
        state::AppState,
    },
};

/// Tag for grouping chapter endpoints in OpenAPI documentation
pub static CHAPTER_TAG: &str = "chapter";

/// Get a chapter for reading.
///
/// Returns the chapter with its page images ordered by display order, each
/// image's text layers and each layer's translations.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Chapter with full overlay tree
/// - `400 Bad Request` - Malformed chapter ID
/// - `404 Not Found` - Chapter not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/chapters/{id}",
    tag = CHAPTER_TAG,
    params(
        ("id" = Uuid, Path, description = "Chapter ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved chapter", body = ChapterDto),
        (status = 400, description = "Malformed chapter ID", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapter(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let chapter = service.get_chapter(id).await?;

    Ok((StatusCode::OK, Json(chapter.into_dto())))
}

/// Add a chapter to a season.
///
/// # Access Control
/// - `Creator` or `Admin`
///
/// # Returns
/// - `201 Created` - Successfully created chapter
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
/// - `500 Internal Server Error` - Database error, including an unknown season
#[utoipa::path(
    post,
    path = "/api/creator/seasons/{id}/chapters",
    tag = CHAPTER_TAG,
    params(
        ("id" = Uuid, Path, description = "Season ID")
    ),
    request_body = CreateChapterDto,
    responses(
        (status = 201, description = "Successfully created chapter", body = ChapterDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller lacks the creator role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    _: CreatorAccess,
    ApiPath(season_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let chapter = service
        .create_chapter(CreateChapterParams::from_dto(season_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(chapter.into_dto())))
}

/// Register a page image on a chapter.
///
/// The image itself lives in external storage; only its URL is recorded.
///
/// # Access Control
/// - `Creator` or `Admin`
///
/// # Returns
/// - `201 Created` - Successfully registered image
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
/// - `500 Internal Server Error` - Database error, including an unknown chapter
#[utoipa::path(
    post,
    path = "/api/creator/chapters/{id}/images",
    tag = CHAPTER_TAG,
    params(
        ("id" = Uuid, Path, description = "Chapter ID")
    ),
    request_body = CreateChapterImageDto,
    responses(
        (status = 201, description = "Successfully registered image", body = ChapterImageDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller lacks the creator role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_chapter_image(
    State(state): State<AppState>,
    _: CreatorAccess,
    ApiPath(chapter_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateChapterImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let image = service
        .add_chapter_image(CreateChapterImageParams::from_dto(chapter_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

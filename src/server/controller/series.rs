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
        series::{CreateSeasonDto, CreateSeriesDto, SeasonDto, SeriesDto},
    },
    server::{
        data::comic::ComicRepositoryImpl,
        error::AppError,
        middleware::{
            auth::CreatorAccess,
            extract::{ApiJson, ApiPath},
        },
        model::series::{CreateSeasonParams, CreateSeriesParams, Series},
        service::comic::ComicService,
        state::AppState,
    },
};

/// Tag for grouping series endpoints in OpenAPI documentation
pub static SERIES_TAG: &str = "series";

/// List the most recently updated series.
///
/// Returns at most 20 series, newest update first, without seasons.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - List of series (possibly empty)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/series",
    tag = SERIES_TAG,
    responses(
        (status = 200, description = "Successfully retrieved series", body = Vec<SeriesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_series(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let series = service.list_series().await?;

    let dtos: Vec<SeriesDto> = series.into_iter().map(Series::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a series with its tags, seasons and chapters.
///
/// Page images and text layers are not included at this depth.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Series with season and chapter index
/// - `400 Bad Request` - Malformed series ID
/// - `404 Not Found` - Series not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    params(
        ("id" = Uuid, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved series", body = SeriesDto),
        (status = 400, description = "Malformed series ID", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let series = service.get_series(id).await?;

    Ok((StatusCode::OK, Json(series.into_dto())))
}

/// Create a new series.
///
/// The series is attributed to the authenticated caller. Each entry of `tags`
/// becomes a new catalog tag.
///
/// # Access Control
/// - `Creator` or `Admin`
///
/// # Returns
/// - `201 Created` - Successfully created series
/// - `400 Bad Request` - English title missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a creator or admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/creator/series",
    tag = SERIES_TAG,
    request_body = CreateSeriesDto,
    responses(
        (status = 201, description = "Successfully created series", body = SeriesDto),
        (status = 400, description = "Invalid series data", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller lacks the creator role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_series(
    State(state): State<AppState>,
    CreatorAccess(user): CreatorAccess,
    ApiJson(payload): ApiJson<CreateSeriesDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let params = CreateSeriesParams::from_dto(user.id, payload);

    let series = service.create_series(params).await?;

    Ok((StatusCode::CREATED, Json(series.into_dto())))
}

/// Add a season to a series.
///
/// # Access Control
/// - `Creator` or `Admin`
///
/// # Returns
/// - `201 Created` - Successfully created season
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
/// - `500 Internal Server Error` - Database error, including an unknown series
#[utoipa::path(
    post,
    path = "/api/creator/series/{id}/seasons",
    tag = SERIES_TAG,
    params(
        ("id" = Uuid, Path, description = "Series ID")
    ),
    request_body = CreateSeasonDto,
    responses(
        (status = 201, description = "Successfully created season", body = SeasonDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller lacks the creator role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    _: CreatorAccess,
    ApiPath(series_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComicService::new(ComicRepositoryImpl::new(&state.db));

    let season = service
        .create_season(CreateSeasonParams::from_dto(series_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(season.into_dto())))
}

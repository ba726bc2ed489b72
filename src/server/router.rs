use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::ban_user,
        chapter::{add_chapter_image, create_chapter, get_chapter},
        layer::{create_layer, get_layers_by_image, translate_layer},
        series::{create_season, create_series, get_series, list_series},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::series::list_series,
        crate::server::controller::series::get_series,
        crate::server::controller::series::create_series,
        crate::server::controller::series::create_season,
        crate::server::controller::chapter::get_chapter,
        crate::server::controller::chapter::create_chapter,
        crate::server::controller::chapter::add_chapter_image,
        crate::server::controller::layer::get_layers_by_image,
        crate::server::controller::layer::create_layer,
        crate::server::controller::layer::translate_layer,
        crate::server::controller::admin::ban_user,
    ),
    tags(
        (name = "series", description = "Series and seasons"),
        (name = "chapter", description = "Chapters and page images"),
        (name = "layer", description = "Text layers and translations"),
        (name = "admin", description = "Moderation"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/series", get(list_series))
        .route("/api/series/{id}", get(get_series))
        .route("/api/chapters/{id}", get(get_chapter))
        .route("/api/images/{id}/layers", get(get_layers_by_image))
        .route("/api/creator/series", post(create_series))
        .route("/api/creator/series/{id}/seasons", post(create_season))
        .route("/api/creator/seasons/{id}/chapters", post(create_chapter))
        .route("/api/creator/chapters/{id}/images", post(add_chapter_image))
        .route("/api/creator/layers", post(create_layer))
        .route("/api/creator/layers/{id}/translate", post(translate_layer))
        .route("/api/admin/users/{id}/ban", post(ban_user))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

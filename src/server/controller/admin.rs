use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use uuid::Uuid;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::{auth::AdminAccess, extract::ApiPath},
        service::admin::AdminService,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Ban a user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Ban recorded
/// - `400 Bad Request` - Malformed user ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/ban",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User banned successfully"),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 401, description = "Caller not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto)
    ),
)]
pub async fn ban_user(
    AdminAccess(admin): AdminAccess,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    AdminService::new().ban_user(user_id, admin.id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({"message": "User banned successfully"})),
    ))
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::announcement::{AnnouncementResponse, CreateAnnouncementRequest};
use uuid::Uuid;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::{CurrentUser, require_admin};
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/announcements",
    request_body = CreateAnnouncementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Announcement published and fanned out", body = ApiEnvelope<AnnouncementResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Requires an administrative role")
    ),
    tag = "announcements"
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;

    let announcement = services::create_announcement(&state, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(announcement))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/announcements",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Announcements targeting the current user, newest first", body = ApiEnvelope<Vec<AnnouncementResponse>>)
    ),
    tag = "announcements"
)]
pub async fn list_announcements(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let announcements = services::list_for_user(&state, &user).await?;

    Ok(Json(ApiEnvelope::ok(announcements)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    params(
        ("id" = Uuid, Path, description = "Announcement identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 403, description = "Only the author or a GA may delete"),
        (status = 404, description = "Announcement not found")
    ),
    tag = "announcements"
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_announcement(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

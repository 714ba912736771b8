use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::common::PaginatedResponse;
use storage::dto::notification::{ListNotificationsQuery, NotificationResponse};
use uuid::Uuid;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(ListNotificationsQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Own notifications, newest first", body = ApiEnvelope<PaginatedResponse<NotificationResponse>>)
    ),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Response, WebError> {
    query.pagination.validate().map_err(WebError::BadRequest)?;

    let page = services::list_notifications(&state, &user, &query).await?;

    Ok(Json(ApiEnvelope::ok(page)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Notification identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Notification marked read", body = ApiEnvelope<NotificationResponse>),
        (status = 404, description = "No such notification of yours")
    ),
    tag = "notifications"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let notification = services::mark_read(&state, &user, id).await?;

    Ok(Json(ApiEnvelope::ok(notification)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All notifications marked read")
    ),
    tag = "notifications"
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let updated = services::mark_all_read(&state, &user).await?;

    Ok(Json(ApiEnvelope::message(format!(
        "{updated} notifications marked read"
    )))
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "No such notification of yours")
    ),
    tag = "notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_notification(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

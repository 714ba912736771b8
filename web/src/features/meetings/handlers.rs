use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::meeting::{CreateMeetingRequest, MeetingResponse, UpdateMeetingRequest};
use uuid::Uuid;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::{CurrentUser, require_admin};
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/meetings",
    request_body = CreateMeetingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Meeting scheduled; attendees resolved and notified", body = ApiEnvelope<MeetingResponse>),
        (status = 400, description = "Validation error or unknown attendee group"),
        (status = 403, description = "Requires an administrative role")
    ),
    tag = "meetings"
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateMeetingRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;
    req.validate_groups().map_err(WebError::BadRequest)?;

    let meeting = services::create_meeting(&state, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(meeting))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meetings",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Meetings the current user attends or convenes", body = ApiEnvelope<Vec<MeetingResponse>>)
    ),
    tag = "meetings"
)]
pub async fn list_meetings(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let meetings = services::list_for_user(&state, &user).await?;

    Ok(Json(ApiEnvelope::ok(meetings)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Meeting found", body = ApiEnvelope<MeetingResponse>),
        (status = 403, description = "Not an attendee or the convener"),
        (status = 404, description = "Meeting not found")
    ),
    tag = "meetings"
)]
pub async fn get_meeting(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let meeting = services::get_meeting(&state, &user, id).await?;

    Ok(Json(ApiEnvelope::ok(meeting)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting identifier")
    ),
    request_body = UpdateMeetingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Meeting updated", body = ApiEnvelope<MeetingResponse>),
        (status = 400, description = "Validation error or unknown attendee group"),
        (status = 403, description = "Only the convener may update"),
        (status = 404, description = "Meeting not found")
    ),
    tag = "meetings"
)]
pub async fn update_meeting(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMeetingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_groups().map_err(WebError::BadRequest)?;

    let meeting = services::update_meeting(&state, &user, id, &req).await?;

    Ok(Json(ApiEnvelope::ok(meeting)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Meeting cancelled"),
        (status = 403, description = "Only the convener or a GA may cancel"),
        (status = 404, description = "Meeting not found")
    ),
    tag = "meetings"
)]
pub async fn delete_meeting(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_meeting(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::event::{
    CreateEventRequest, EventResponse, ListEventsQuery, UpdateEventRequest,
};
use uuid::Uuid;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::{CurrentUser, require_admin};
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/events",
    params(ListEventsQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Events listed", body = ApiEnvelope<Vec<EventResponse>>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Response, WebError> {
    let events = services::list_events(&state, &query).await?;

    Ok(Json(ApiEnvelope::ok(events)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event found", body = ApiEnvelope<EventResponse>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(&state, id).await?;

    Ok(Json(ApiEnvelope::ok(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = ApiEnvelope<EventResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Requires an administrative role")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;
    req.validate_schedule().map_err(WebError::BadRequest)?;

    let event = services::create_event(&state, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event identifier")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event updated", body = ApiEnvelope<EventResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;

    let event = services::update_event(&state, id, &req).await?;

    Ok(Json(ApiEnvelope::ok(event)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    services::delete_event(&state, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::chat::{ChatHistoryQuery, ChatMessageResponse, SendMessageRequest};
use storage::dto::common::PaginatedResponse;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/chat/{channel}/messages",
    params(
        ("channel" = String, Path, description = "Channel: a domain token or 'general'"),
        ChatHistoryQuery
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Messages, newest first", body = ApiEnvelope<PaginatedResponse<ChatMessageResponse>>),
        (status = 400, description = "Unknown channel"),
        (status = 403, description = "Not a member of this channel")
    ),
    tag = "chat"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(channel): Path<String>,
    Query(query): Query<ChatHistoryQuery>,
) -> Result<Response, WebError> {
    query.pagination.validate().map_err(WebError::BadRequest)?;

    let page = services::list_messages(&state, &user, &channel, &query.pagination).await?;

    Ok(Json(ApiEnvelope::ok(page)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/chat/{channel}/messages",
    params(
        ("channel" = String, Path, description = "Channel: a domain token or 'general'")
    ),
    request_body = SendMessageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Message sent", body = ApiEnvelope<ChatMessageResponse>),
        (status = 400, description = "Validation error or unknown channel"),
        (status = 403, description = "Not a member of this channel")
    ),
    tag = "chat"
)]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(channel): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let message = services::send_message(&state, &user, &channel, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(message))).into_response())
}

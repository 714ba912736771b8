use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use storage::dto::invitation::{
    CreateInvitationRequest, InvitationResponse, RedeemInvitationRequest,
};
use storage::dto::user::UserResponse;
use uuid::Uuid;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::{CurrentUser, require_admin, verified_identity};
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/invitations",
    request_body = CreateInvitationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Invitation created and emailed", body = ApiEnvelope<InvitationResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Insufficient authority over the invited role")
    ),
    tag = "invitations"
)]
pub async fn create_invitation(
    State(state): State<AppState>,
    Extension(CurrentUser(acting)): Extension<CurrentUser>,
    Json(req): Json<CreateInvitationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let invitation = services::create_invitation(&state, &acting, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(invitation))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/invitations",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Invitations listed", body = ApiEnvelope<Vec<InvitationResponse>>),
        (status = 403, description = "Requires an administrative role")
    ),
    tag = "invitations"
)]
pub async fn list_invitations(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    let invitations = services::list_invitations(&state).await?;

    Ok(Json(ApiEnvelope::ok(invitations)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/invitations/redeem",
    request_body = RedeemInvitationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Invitation redeemed, account created", body = ApiEnvelope<UserResponse>),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Invitation was issued to a different email"),
        (status = 404, description = "No pending invitation for this code")
    ),
    tag = "invitations"
)]
pub async fn redeem_invitation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RedeemInvitationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let identity = verified_identity(&state, &headers).await?;
    let user = services::redeem_invitation(&state, identity, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(user))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/invitations/{id}",
    params(
        ("id" = Uuid, Path, description = "Invitation identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Invitation revoked", body = ApiEnvelope<InvitationResponse>),
        (status = 403, description = "Insufficient authority"),
        (status = 404, description = "Invitation not found"),
        (status = 409, description = "Invitation is no longer pending")
    ),
    tag = "invitations"
)]
pub async fn revoke_invitation(
    State(state): State<AppState>,
    Extension(CurrentUser(acting)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let invitation = services::revoke_invitation(&state, &acting, id).await?;

    Ok(Json(ApiEnvelope::ok(invitation)).into_response())
}

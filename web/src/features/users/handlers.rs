use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use storage::dto::user::{ListUsersQuery, RegisterUserRequest, UpdateRoleRequest, UserResponse};
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::{CurrentUser, require_admin, verified_identity};
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Account registered", body = ApiEnvelope<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthenticated"),
        (status = 409, description = "Already registered")
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let identity = verified_identity(&state, &headers).await?;
    let user = services::register(&state, identity, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(user))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Users listed", body = ApiEnvelope<Vec<UserResponse>>),
        (status = 403, description = "Requires an administrative role")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    let users = services::list_users(&state, &query).await?;

    Ok(Json(ApiEnvelope::ok(users)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current user profile", body = ApiEnvelope<UserResponse>)
    ),
    tag = "users"
)]
pub async fn get_me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    Ok(Json(ApiEnvelope::ok(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{uid}",
    params(
        ("uid" = String, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "User found", body = ApiEnvelope<UserResponse>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Response, WebError> {
    let user = services::get_user(&state, &uid).await?;

    Ok(Json(ApiEnvelope::ok(user)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{uid}/role",
    params(
        ("uid" = String, Path, description = "User identifier")
    ),
    request_body = UpdateRoleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Role updated", body = ApiEnvelope<UserResponse>),
        (status = 403, description = "Insufficient authority"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn update_role(
    State(state): State<AppState>,
    Extension(CurrentUser(acting)): Extension<CurrentUser>,
    Path(uid): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Response, WebError> {
    let user = services::update_role(&state, &acting, &uid, &req).await?;

    Ok(Json(ApiEnvelope::ok(user)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{uid}/deactivate",
    params(
        ("uid" = String, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "User deactivated", body = ApiEnvelope<UserResponse>),
        (status = 403, description = "Insufficient authority"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    Extension(CurrentUser(acting)): Extension<CurrentUser>,
    Path(uid): Path<String>,
) -> Result<Response, WebError> {
    let user = services::deactivate_user(&state, &acting, &uid).await?;

    Ok(Json(ApiEnvelope::ok(user)).into_response())
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::finance::{CreateFinanceRequest, FinanceResponse, ReviewFinanceRequest};
use uuid::Uuid;
use validator::Validate;

use super::services;
use crate::error::WebError;
use crate::middleware::auth::{CurrentUser, require_admin};
use crate::response::ApiEnvelope;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/finance",
    request_body = CreateFinanceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Request submitted", body = ApiEnvelope<FinanceResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Students cannot submit finance requests")
    ),
    tag = "finance"
)]
pub async fn create_request(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateFinanceRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let request = services::create_request(&state, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(request))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/finance",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Own requests; every request for administrators", body = ApiEnvelope<Vec<FinanceResponse>>)
    ),
    tag = "finance"
)]
pub async fn list_requests(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let requests = services::list_requests(&state, &user).await?;

    Ok(Json(ApiEnvelope::ok(requests)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/finance/{id}",
    params(
        ("id" = Uuid, Path, description = "Request identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Request found", body = ApiEnvelope<FinanceResponse>),
        (status = 403, description = "Not the requester or an administrator"),
        (status = 404, description = "Request not found")
    ),
    tag = "finance"
)]
pub async fn get_request(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let request = services::get_request(&state, &user, id).await?;

    Ok(Json(ApiEnvelope::ok(request)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/finance/{id}/review",
    params(
        ("id" = Uuid, Path, description = "Request identifier")
    ),
    request_body = ReviewFinanceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Request reviewed", body = ApiEnvelope<FinanceResponse>),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request already reviewed")
    ),
    tag = "finance"
)]
pub async fn review_request(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewFinanceRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;

    let request = services::review_request(&state, &user, id, &req).await?;

    Ok(Json(ApiEnvelope::ok(request)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/finance/{id}",
    params(
        ("id" = Uuid, Path, description = "Request identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Pending request withdrawn"),
        (status = 404, description = "No pending request of yours with this id")
    ),
    tag = "finance"
)]
pub async fn delete_request(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_request(&state, &user, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::fixture::{CreateFixtureRequest, FixtureResponse, UpdateFixtureStatusRequest};
use storage::dto::team::{
    AwardPointsRequest, CreateTeamRequest, TeamDetailResponse, TeamResponse,
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
    path = "/api/teams",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Leaderboard, highest total first", body = ApiEnvelope<Vec<TeamResponse>>)
    ),
    tag = "sports"
)]
pub async fn list_teams(State(state): State<AppState>) -> Result<Response, WebError> {
    let teams = services::list_teams(&state).await?;

    Ok(Json(ApiEnvelope::ok(teams)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created", body = ApiEnvelope<TeamResponse>),
        (status = 403, description = "Requires an administrative role"),
        (status = 409, description = "Team name already exists")
    ),
    tag = "sports"
)]
pub async fn create_team(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;

    let team = services::create_team(&state, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(team))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team with its award log", body = ApiEnvelope<TeamDetailResponse>),
        (status = 404, description = "Team not found")
    ),
    tag = "sports"
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(&state, id).await?;

    Ok(Json(ApiEnvelope::ok(team)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Team not found")
    ),
    tag = "sports"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    services::delete_team(&state, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams/{id}/points",
    params(
        ("id" = Uuid, Path, description = "Team identifier")
    ),
    request_body = AwardPointsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Points awarded; updated team returned", body = ApiEnvelope<TeamResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Team not found")
    ),
    tag = "sports"
)]
pub async fn award_points(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<AwardPointsRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;
    req.validate_points().map_err(WebError::BadRequest)?;

    let team = services::award_points(&state, &user, id, &req).await?;

    Ok(Json(ApiEnvelope::ok(team)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fixtures",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fixtures in schedule order", body = ApiEnvelope<Vec<FixtureResponse>>)
    ),
    tag = "sports"
)]
pub async fn list_fixtures(State(state): State<AppState>) -> Result<Response, WebError> {
    let fixtures = services::list_fixtures(&state).await?;

    Ok(Json(ApiEnvelope::ok(fixtures)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/fixtures",
    request_body = CreateFixtureRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Fixture created", body = ApiEnvelope<FixtureResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Requires an administrative role"),
        (status = 409, description = "Unknown team")
    ),
    tag = "sports"
)]
pub async fn create_fixture(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateFixtureRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;
    req.validate_teams().map_err(WebError::BadRequest)?;

    let fixture = services::create_fixture(&state, &req).await?;

    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(fixture))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fixtures/{id}",
    params(
        ("id" = Uuid, Path, description = "Fixture identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fixture found", body = ApiEnvelope<FixtureResponse>),
        (status = 404, description = "Fixture not found")
    ),
    tag = "sports"
)]
pub async fn get_fixture(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let fixture = services::get_fixture(&state, id).await?;

    Ok(Json(ApiEnvelope::ok(fixture)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/fixtures/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Fixture identifier")
    ),
    request_body = UpdateFixtureStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fixture status updated", body = ApiEnvelope<FixtureResponse>),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Fixture not found")
    ),
    tag = "sports"
)]
pub async fn update_fixture_status(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFixtureStatusRequest>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    req.validate()?;

    let fixture = services::update_fixture_status(&state, id, &req).await?;

    Ok(Json(ApiEnvelope::ok(fixture)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/fixtures/{id}",
    params(
        ("id" = Uuid, Path, description = "Fixture identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Fixture deleted"),
        (status = 403, description = "Requires an administrative role"),
        (status = 404, description = "Fixture not found")
    ),
    tag = "sports"
)]
pub async fn delete_fixture(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    require_admin(&user)?;

    services::delete_fixture(&state, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

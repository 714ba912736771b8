use storage::dto::fixture::{CreateFixtureRequest, FixtureResponse, UpdateFixtureStatusRequest};
use storage::dto::team::{
    AwardPointsRequest, CreateTeamRequest, TeamDetailResponse, TeamResponse,
};
use storage::models::User;
use storage::repository::fixture::FixtureRepository;
use storage::repository::team::TeamRepository;
use uuid::Uuid;

use crate::error::WebResult;
use crate::state::AppState;

pub async fn list_teams(state: &AppState) -> WebResult<Vec<TeamResponse>> {
    let repo = TeamRepository::new(state.db.pool());
    let teams = repo.list().await?;

    Ok(teams.into_iter().map(TeamResponse::from).collect())
}

pub async fn create_team(state: &AppState, req: &CreateTeamRequest) -> WebResult<TeamResponse> {
    let repo = TeamRepository::new(state.db.pool());
    let team = repo.create(req).await?;

    Ok(TeamResponse::from(team))
}

pub async fn get_team(state: &AppState, id: Uuid) -> WebResult<TeamDetailResponse> {
    let repo = TeamRepository::new(state.db.pool());
    let team = repo.find_by_id(id).await?;
    let entries = repo.list_points(id).await?;

    Ok(TeamDetailResponse::new(team, entries))
}

pub async fn delete_team(state: &AppState, id: Uuid) -> WebResult<()> {
    let repo = TeamRepository::new(state.db.pool());
    repo.delete(id).await?;

    Ok(())
}

/// Total bump and log append happen atomically in the repository; this
/// layer only records who awarded.
pub async fn award_points(
    state: &AppState,
    awarding: &User,
    team_id: Uuid,
    req: &AwardPointsRequest,
) -> WebResult<TeamResponse> {
    let repo = TeamRepository::new(state.db.pool());
    let (team, entry) = repo.award_points(team_id, req, &awarding.uid).await?;

    tracing::info!(
        team = %team.name,
        points = entry.points,
        event = %entry.event_id,
        "Points awarded"
    );

    Ok(TeamResponse::from(team))
}

pub async fn list_fixtures(state: &AppState) -> WebResult<Vec<FixtureResponse>> {
    let repo = FixtureRepository::new(state.db.pool());
    let fixtures = repo.list().await?;

    Ok(fixtures.into_iter().map(FixtureResponse::from).collect())
}

pub async fn create_fixture(
    state: &AppState,
    req: &CreateFixtureRequest,
) -> WebResult<FixtureResponse> {
    let repo = FixtureRepository::new(state.db.pool());
    let fixture = repo.create(req).await?;

    Ok(FixtureResponse::from(fixture))
}

pub async fn get_fixture(state: &AppState, id: Uuid) -> WebResult<FixtureResponse> {
    let repo = FixtureRepository::new(state.db.pool());
    let fixture = repo.find_by_id(id).await?;

    Ok(FixtureResponse::from(fixture))
}

pub async fn update_fixture_status(
    state: &AppState,
    id: Uuid,
    req: &UpdateFixtureStatusRequest,
) -> WebResult<FixtureResponse> {
    let repo = FixtureRepository::new(state.db.pool());
    let fixture = repo
        .set_status(id, req.status, req.result.as_deref())
        .await?;

    Ok(FixtureResponse::from(fixture))
}

pub async fn delete_fixture(state: &AppState, id: Uuid) -> WebResult<()> {
    let repo = FixtureRepository::new(state.db.pool());
    repo.delete(id).await?;

    Ok(())
}

use axum::{
    Router,
    middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    award_points, create_fixture, create_team, delete_fixture, delete_team, get_fixture,
    get_team, list_fixtures, list_teams, update_fixture_status,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// `/api/teams` — the leaderboard and the points ledger.
pub fn team_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams))
        .route("/", post(create_team))
        .route("/:id", get(get_team))
        .route("/:id", delete(delete_team))
        .route("/:id/points", post(award_points))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// `/api/fixtures` — the match schedule.
pub fn fixture_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_fixtures))
        .route("/", post(create_fixture))
        .route("/:id", get(get_fixture))
        .route("/:id", delete(delete_fixture))
        .route("/:id/status", put(update_fixture_status))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

use axum::{
    Router,
    middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_announcement, delete_announcement, list_announcements};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_announcements))
        .route("/", post(create_announcement))
        .route("/:id", delete(delete_announcement))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

use axum::{
    Router,
    middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_meeting, delete_meeting, get_meeting, list_meetings, update_meeting,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_meetings))
        .route("/", post(create_meeting))
        .route("/:id", get(get_meeting))
        .route("/:id", put(update_meeting))
        .route("/:id", delete(delete_meeting))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

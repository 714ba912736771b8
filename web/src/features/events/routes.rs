use axum::{
    Router,
    middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_event, delete_event, get_event, list_events, update_event};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/", post(create_event))
        .route("/:id", get(get_event))
        .route("/:id", put(update_event))
        .route("/:id", delete(delete_event))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

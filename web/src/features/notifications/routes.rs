use axum::{
    Router,
    middleware,
    routing::{delete, get, put},
};

use super::handlers::{delete_notification, list_notifications, mark_all_read, mark_read};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/read-all", put(mark_all_read))
        .route("/:id/read", put(mark_read))
        .route("/:id", delete(delete_notification))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

use axum::{
    Router,
    middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_request, delete_request, get_request, list_requests, review_request,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests))
        .route("/", post(create_request))
        .route("/:id", get(get_request))
        .route("/:id", delete(delete_request))
        .route("/:id/review", put(review_request))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

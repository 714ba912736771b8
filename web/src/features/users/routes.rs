use axum::{
    Router,
    middleware,
    routing::{get, post, put},
};

use super::handlers::{deactivate_user, get_me, get_user, list_users, register, update_role};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_users))
        .route("/me", get(get_me))
        .route("/:uid", get(get_user))
        .route("/:uid/role", put(update_role))
        .route("/:uid/deactivate", put(deactivate_user))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(register))
        .merge(protected)
}

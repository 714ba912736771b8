use axum::{
    Router,
    middleware,
    routing::{get, post},
};

use super::handlers::{list_messages, send_message};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:channel/messages", get(list_messages))
        .route("/:channel/messages", post(send_message))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

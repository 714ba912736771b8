use axum::{
    Router,
    middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_invitation, list_invitations, redeem_invitation, revoke_invitation};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_invitation))
        .route("/", get(list_invitations))
        .route("/:id", delete(revoke_invitation))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    // Redemption happens before an account row exists; it carries its own
    // token verification.
    Router::new()
        .route("/redeem", post(redeem_invitation))
        .merge(protected)
}

use storage::dto::user::{ListUsersQuery, RegisterUserRequest, UpdateRoleRequest, UserResponse};
use storage::models::{Role, User};
use storage::repository::user::UserRepository;

use crate::clients::identity::VerifiedIdentity;
use crate::error::{WebError, WebResult};
use crate::middleware::auth::require_authority;
use crate::state::AppState;

/// Self-registration always lands on the `student` tier; elevated roles
/// are granted through invitations or an explicit role change.
pub async fn register(
    state: &AppState,
    identity: VerifiedIdentity,
    req: &RegisterUserRequest,
) -> WebResult<UserResponse> {
    if let Some(provider_email) = &identity.email {
        if !provider_email.eq_ignore_ascii_case(&req.email) {
            return Err(WebError::BadRequest(
                "Email does not match the signed-in identity".to_string(),
            ));
        }
    }

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .create(
            &identity.uid,
            &req.display_name,
            &req.email,
            Role::Student,
            req.domain,
        )
        .await?;

    state
        .identity
        .assign_role_claim(&user.uid, user.role, user.domain)
        .await?;

    Ok(UserResponse::from(user))
}

pub async fn list_users(state: &AppState, query: &ListUsersQuery) -> WebResult<Vec<UserResponse>> {
    let repo = UserRepository::new(state.db.pool());
    let users = repo.list(query.role, query.domain).await?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}

pub async fn get_user(state: &AppState, uid: &str) -> WebResult<UserResponse> {
    let repo = UserRepository::new(state.db.pool());
    let user = repo.find_by_uid(uid).await?;

    Ok(UserResponse::from(user))
}

/// The acting user must outrank both the target's current role and the
/// role being granted; nobody can promote into their own tier or above.
pub async fn update_role(
    state: &AppState,
    acting: &User,
    uid: &str,
    req: &UpdateRoleRequest,
) -> WebResult<UserResponse> {
    let repo = UserRepository::new(state.db.pool());
    let target = repo.find_by_uid(uid).await?;

    require_authority(acting, target.role)?;
    require_authority(acting, req.role)?;

    let updated = repo.update_role(uid, req.role, req.domain).await?;

    state
        .identity
        .assign_role_claim(&updated.uid, updated.role, updated.domain)
        .await?;

    Ok(UserResponse::from(updated))
}

pub async fn deactivate_user(state: &AppState, acting: &User, uid: &str) -> WebResult<UserResponse> {
    let repo = UserRepository::new(state.db.pool());
    let target = repo.find_by_uid(uid).await?;

    require_authority(acting, target.role)?;

    let updated = repo.set_active(uid, false).await?;

    Ok(UserResponse::from(updated))
}

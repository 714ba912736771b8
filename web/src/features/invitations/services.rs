use storage::dto::invitation::{
    CreateInvitationRequest, InvitationResponse, RedeemInvitationRequest,
};
use storage::dto::user::UserResponse;
use storage::error::StorageError;
use storage::models::{Invitation, User};
use storage::repository::invitation::InvitationRepository;
use storage::repository::user::UserRepository;
use storage::services::access_code::generate_access_code;
use uuid::Uuid;

use crate::clients::identity::VerifiedIdentity;
use crate::error::{WebError, WebResult};
use crate::middleware::auth::require_authority;
use crate::state::AppState;

// Retries on access-code collision; the codespace is 32^6 so two attempts
// is already unheard of.
const MAX_CODE_ATTEMPTS: usize = 5;

pub async fn create_invitation(
    state: &AppState,
    acting: &User,
    req: &CreateInvitationRequest,
) -> WebResult<InvitationResponse> {
    require_authority(acting, req.role)?;

    let invitation = insert_with_fresh_code(state, acting, req).await?;

    state
        .email
        .send_invitation(&invitation.email, invitation.role, &invitation.access_code)
        .await?;

    tracing::info!(
        email = %invitation.email,
        role = %invitation.role.as_token(),
        "Invitation issued"
    );

    Ok(InvitationResponse::from(invitation))
}

async fn insert_with_fresh_code(
    state: &AppState,
    acting: &User,
    req: &CreateInvitationRequest,
) -> WebResult<Invitation> {
    let repo = InvitationRepository::new(state.db.pool());

    for _ in 0..MAX_CODE_ATTEMPTS {
        let access_code = generate_access_code();

        match repo
            .create(&req.email, req.role, req.domain, &access_code, &acting.uid)
            .await
        {
            Ok(invitation) => return Ok(invitation),
            Err(StorageError::ConstraintViolation(_)) => {
                tracing::warn!("Access code collision, regenerating");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(WebError::Storage(StorageError::ConstraintViolation(
        "Could not allocate a unique access code".to_string(),
    )))
}

pub async fn list_invitations(state: &AppState) -> WebResult<Vec<InvitationResponse>> {
    let repo = InvitationRepository::new(state.db.pool());
    let invitations = repo.list().await?;

    Ok(invitations
        .into_iter()
        .map(InvitationResponse::from)
        .collect())
}

/// Turn a pending invitation plus a verified identity into an account
/// with the invited role, and push the matching claim to the provider.
pub async fn redeem_invitation(
    state: &AppState,
    identity: VerifiedIdentity,
    req: &RedeemInvitationRequest,
) -> WebResult<UserResponse> {
    let invitations = InvitationRepository::new(state.db.pool());
    let invitation = invitations
        .find_pending_by_code(&req.normalized_code())
        .await?;

    if let Some(provider_email) = &identity.email {
        if !provider_email.eq_ignore_ascii_case(&invitation.email) {
            return Err(WebError::Forbidden(
                "Invitation was issued to a different email".to_string(),
            ));
        }
    }

    let users = UserRepository::new(state.db.pool());
    let user = users
        .create(
            &identity.uid,
            &req.display_name,
            &invitation.email,
            invitation.role,
            invitation.domain,
        )
        .await?;

    invitations
        .mark_accepted(invitation.invitation_id, &user.uid)
        .await?;

    state
        .identity
        .assign_role_claim(&user.uid, user.role, user.domain)
        .await?;

    Ok(UserResponse::from(user))
}

pub async fn revoke_invitation(
    state: &AppState,
    acting: &User,
    id: Uuid,
) -> WebResult<InvitationResponse> {
    let repo = InvitationRepository::new(state.db.pool());
    let invitation = repo.find_by_id(id).await?;

    require_authority(acting, invitation.role)?;

    let revoked = repo.revoke(id).await?;

    Ok(InvitationResponse::from(revoked))
}

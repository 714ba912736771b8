use storage::dto::chat::{ChatMessageResponse, SendMessageRequest};
use storage::dto::common::{PaginatedResponse, PaginationParams};
use storage::models::{Domain, User};
use storage::repository::chat::ChatRepository;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

pub const GENERAL_CHANNEL: &str = "general";

/// Channels are `general` plus one per domain. Administrators may use any
/// channel; everyone else is limited to `general` and their own domain's
/// channel.
fn check_channel_access(user: &User, channel: &str) -> Result<(), WebError> {
    if channel == GENERAL_CHANNEL {
        return Ok(());
    }

    let domain = Domain::from_token(channel)
        .ok_or_else(|| WebError::BadRequest(format!("Unknown channel: {channel}")))?;

    if user.role.is_admin() || user.domain == Some(domain) {
        Ok(())
    } else {
        Err(WebError::Forbidden(
            "Not a member of this channel".to_string(),
        ))
    }
}

pub async fn list_messages(
    state: &AppState,
    user: &User,
    channel: &str,
    pagination: &PaginationParams,
) -> WebResult<PaginatedResponse<ChatMessageResponse>> {
    check_channel_access(user, channel)?;

    let repo = ChatRepository::new(state.db.pool());
    let messages = repo
        .list_channel(
            channel,
            pagination.limit() as i64,
            pagination.offset() as i64,
        )
        .await?;
    let total = repo.count_channel(channel).await?;

    let items = messages
        .into_iter()
        .map(ChatMessageResponse::from)
        .collect();

    Ok(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.page_size,
        total,
    ))
}

pub async fn send_message(
    state: &AppState,
    user: &User,
    channel: &str,
    req: &SendMessageRequest,
) -> WebResult<ChatMessageResponse> {
    check_channel_access(user, channel)?;

    let repo = ChatRepository::new(state.db.pool());
    let message = repo.insert(channel, &user.uid, &req.body).await?;

    Ok(ChatMessageResponse::from(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::models::Role;

    fn user(role: Role, domain: Option<Domain>) -> User {
        User {
            uid: "u1".to_string(),
            display_name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
            domain,
            is_active: true,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_everyone_may_use_general() {
        let student = user(Role::Student, None);
        assert!(check_channel_access(&student, GENERAL_CHANNEL).is_ok());
    }

    #[test]
    fn test_domain_channel_requires_membership() {
        let animator = user(Role::Animator, Some(Domain::Sports));
        assert!(check_channel_access(&animator, "sports").is_ok());
        assert!(check_channel_access(&animator, "literary").is_err());
    }

    #[test]
    fn test_admins_may_use_any_channel() {
        let ga = user(Role::Ga, None);
        assert!(check_channel_access(&ga, "sports").is_ok());
        assert!(check_channel_access(&ga, "performing_creative_arts").is_ok());
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let ga = user(Role::Ga, None);
        assert!(matches!(
            check_channel_access(&ga, "memes"),
            Err(WebError::BadRequest(_))
        ));
    }
}

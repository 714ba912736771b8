use storage::dto::announcement::{AnnouncementResponse, CreateAnnouncementRequest};
use storage::models::{Role, User};
use storage::repository::announcement::AnnouncementRepository;
use storage::repository::notification::NotificationRepository;
use storage::repository::user::UserRepository;
use storage::services::targeting::is_targeted;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Publish and fan out: one notification per targeted active user. The
/// announcement insert and the notification fan-out are separate writes;
/// a crash between them loses notifications, not the announcement.
pub async fn create_announcement(
    state: &AppState,
    author: &User,
    req: &CreateAnnouncementRequest,
) -> WebResult<AnnouncementResponse> {
    let repo = AnnouncementRepository::new(state.db.pool());
    let announcement = repo.create(req, &author.uid).await?;

    let users = UserRepository::new(state.db.pool());
    let recipients: Vec<String> = users
        .list_active()
        .await?
        .into_iter()
        .filter(|user| {
            is_targeted(
                user.role,
                user.domain,
                &announcement.target_roles.0,
                &announcement.target_domains.0,
            )
        })
        .map(|user| user.uid)
        .collect();

    let notifications = NotificationRepository::new(state.db.pool());
    let delivered = notifications
        .insert_for(&recipients, &announcement.title, &announcement.body, "announcement")
        .await?;

    tracing::info!(
        announcement = %announcement.announcement_id,
        recipients = delivered,
        "Announcement published"
    );

    Ok(AnnouncementResponse::from(announcement))
}

/// Announcements whose audience includes the current user.
pub async fn list_for_user(state: &AppState, user: &User) -> WebResult<Vec<AnnouncementResponse>> {
    let repo = AnnouncementRepository::new(state.db.pool());
    let announcements = repo.list().await?;

    Ok(announcements
        .into_iter()
        .filter(|announcement| {
            is_targeted(
                user.role,
                user.domain,
                &announcement.target_roles.0,
                &announcement.target_domains.0,
            )
        })
        .map(AnnouncementResponse::from)
        .collect())
}

pub async fn delete_announcement(state: &AppState, user: &User, id: Uuid) -> WebResult<()> {
    let repo = AnnouncementRepository::new(state.db.pool());
    let announcement = repo.find_by_id(id).await?;

    if announcement.created_by != user.uid && user.role != Role::Ga {
        return Err(WebError::Forbidden(
            "Only the author or a GA may delete an announcement".to_string(),
        ));
    }

    repo.delete(id).await?;

    Ok(())
}

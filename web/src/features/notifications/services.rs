use storage::dto::common::PaginatedResponse;
use storage::dto::notification::{ListNotificationsQuery, NotificationResponse};
use storage::models::User;
use storage::repository::notification::NotificationRepository;
use uuid::Uuid;

use crate::error::WebResult;
use crate::state::AppState;

pub async fn list_notifications(
    state: &AppState,
    user: &User,
    query: &ListNotificationsQuery,
) -> WebResult<PaginatedResponse<NotificationResponse>> {
    let repo = NotificationRepository::new(state.db.pool());

    let notifications = repo
        .list(
            &user.uid,
            query.unread_only,
            query.pagination.limit() as i64,
            query.pagination.offset() as i64,
        )
        .await?;
    let total = repo.count(&user.uid, query.unread_only).await?;

    let items = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();

    Ok(PaginatedResponse::new(
        items,
        query.pagination.page,
        query.pagination.page_size,
        total,
    ))
}

pub async fn mark_read(state: &AppState, user: &User, id: Uuid) -> WebResult<NotificationResponse> {
    let repo = NotificationRepository::new(state.db.pool());
    let notification = repo.mark_read(id, &user.uid).await?;

    Ok(NotificationResponse::from(notification))
}

pub async fn mark_all_read(state: &AppState, user: &User) -> WebResult<u64> {
    let repo = NotificationRepository::new(state.db.pool());
    let updated = repo.mark_all_read(&user.uid).await?;

    Ok(updated)
}

pub async fn delete_notification(state: &AppState, user: &User, id: Uuid) -> WebResult<()> {
    let repo = NotificationRepository::new(state.db.pool());
    repo.delete(id, &user.uid).await?;

    Ok(())
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::models::Notification;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponse {
    pub notification_id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            notification_id: notification.notification_id,
            title: notification.title,
            body: notification.body,
            kind: notification.kind,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListNotificationsQuery {
    #[serde(default)]
    pub unread_only: bool,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Announcement, Domain, Role};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementResponse {
    pub announcement_id: Uuid,
    pub title: String,
    pub body: String,
    pub target_roles: Vec<Role>,
    pub target_domains: Vec<Domain>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(announcement: Announcement) -> Self {
        Self {
            announcement_id: announcement.announcement_id,
            title: announcement.title,
            body: announcement.body,
            target_roles: announcement.target_roles.0,
            target_domains: announcement.target_domains.0,
            created_by: announcement.created_by,
            created_at: announcement.created_at,
        }
    }
}

/// Empty target lists leave that dimension unconstrained; two empty lists
/// broadcast to everyone.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAnnouncementRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Body is required"))]
    pub body: String,

    #[serde(default)]
    pub target_roles: Vec<Role>,

    #[serde(default)]
    pub target_domains: Vec<Domain>,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// `attendee_groups` keeps the raw tokens as submitted; `attendees` is the
/// uid list they resolved to at creation/update time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meeting {
    pub meeting_id: Uuid,
    pub title: String,
    pub agenda: String,
    pub venue: String,
    pub scheduled_at: chrono::NaiveDateTime,
    pub attendee_groups: Json<Vec<String>>,
    pub attendees: Json<Vec<String>>,
    pub created_by: String,
    pub created_at: chrono::NaiveDateTime,
}

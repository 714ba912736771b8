use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Domain;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub domain: Domain,
    pub venue: String,
    pub starts_at: chrono::NaiveDateTime,
    pub ends_at: chrono::NaiveDateTime,
    pub image_id: Option<String>,
    pub created_by: String,
    pub created_at: chrono::NaiveDateTime,
}

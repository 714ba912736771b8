use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub channel: String,
    pub sender_uid: String,
    pub body: String,
    pub sent_at: chrono::NaiveDateTime,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::PaginationParams;
use crate::models::ChatMessage;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    pub message_id: Uuid,
    pub channel: String,
    pub sender_uid: String,
    pub body: String,
    pub sent_at: NaiveDateTime,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            message_id: message.message_id,
            channel: message.channel,
            sender_uid: message.sender_uid,
            body: message.body,
            sent_at: message.sent_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Message must be between 1 and 2000 characters"
    ))]
    pub body: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ChatHistoryQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

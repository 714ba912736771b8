use sqlx::PgPool;

use crate::error::Result;
use crate::models::ChatMessage;

pub struct ChatRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ChatRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        channel: &str,
        sender_uid: &str,
        body: &str,
    ) -> Result<ChatMessage> {
        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (channel, sender_uid, body)
            VALUES ($1, $2, $3)
            RETURNING message_id, channel, sender_uid, body, sent_at
            "#,
        )
        .bind(channel)
        .bind(sender_uid)
        .bind(body)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// Newest first, paginated.
    pub async fn list_channel(
        &self,
        channel: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT message_id, channel, sender_uid, body, sent_at
            FROM chat_messages
            WHERE channel = $1
            ORDER BY sent_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(channel)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn count_channel(&self, channel: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM chat_messages WHERE channel = $1",
        )
        .bind(channel)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Notification;

pub struct NotificationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fan a notification out to a recipient list in one insert. Returns
    /// the number written; an empty list writes nothing.
    pub async fn insert_for(
        &self,
        recipients: &[String],
        title: &str,
        body: &str,
        kind: &str,
    ) -> Result<u64> {
        if recipients.is_empty() {
            return Ok(0);
        }

        let mut query =
            QueryBuilder::new("INSERT INTO notifications (recipient_uid, title, body, kind) ");

        query.push_values(recipients, |mut row, recipient| {
            row.push_bind(recipient)
                .push_bind(title)
                .push_bind(body)
                .push_bind(kind);
        });

        let result = query.build().execute(self.pool).await?;

        Ok(result.rows_affected())
    }

    pub async fn list(
        &self,
        recipient_uid: &str,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT notification_id, recipient_uid, title, body, kind, is_read, created_at
            FROM notifications
            WHERE recipient_uid =
            "#,
        );
        query.push_bind(recipient_uid);

        if unread_only {
            query.push(" AND NOT is_read");
        }

        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let notifications = query
            .build_query_as::<Notification>()
            .fetch_all(self.pool)
            .await?;

        Ok(notifications)
    }

    pub async fn count(&self, recipient_uid: &str, unread_only: bool) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM notifications WHERE recipient_uid = ");
        query.push_bind(recipient_uid);

        if unread_only {
            query.push(" AND NOT is_read");
        }

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Recipient-scoped so a user can only touch their own notifications.
    pub async fn mark_read(&self, id: Uuid, recipient_uid: &str) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE notification_id = $1 AND recipient_uid = $2
            RETURNING notification_id, recipient_uid, title, body, kind, is_read, created_at
            "#,
        )
        .bind(id)
        .bind(recipient_uid)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(notification)
    }

    pub async fn mark_all_read(&self, recipient_uid: &str) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE recipient_uid = $1 AND NOT is_read",
        )
        .bind(recipient_uid)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Uuid, recipient_uid: &str) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM notifications WHERE notification_id = $1 AND recipient_uid = $2",
        )
        .bind(id)
        .bind(recipient_uid)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

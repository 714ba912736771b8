use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::announcement::CreateAnnouncementRequest;
use crate::error::{Result, StorageError};
use crate::models::Announcement;

pub struct AnnouncementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        req: &CreateAnnouncementRequest,
        created_by: &str,
    ) -> Result<Announcement> {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            INSERT INTO announcements (title, body, target_roles, target_domains, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING announcement_id, title, body, target_roles, target_domains,
                      created_by, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.body)
        .bind(Json(req.target_roles.clone()))
        .bind(Json(req.target_domains.clone()))
        .bind(created_by)
        .fetch_one(self.pool)
        .await?;

        Ok(announcement)
    }

    /// Newest first; audience filtering happens above this layer.
    pub async fn list(&self) -> Result<Vec<Announcement>> {
        let announcements = sqlx::query_as::<_, Announcement>(
            r#"
            SELECT announcement_id, title, body, target_roles, target_domains,
                   created_by, created_at
            FROM announcements
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(announcements)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Announcement> {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            SELECT announcement_id, title, body, target_roles, target_domains,
                   created_by, created_at
            FROM announcements
            WHERE announcement_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(announcement)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM announcements WHERE announcement_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

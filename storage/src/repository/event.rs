use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::{Domain, Event};

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        req: &CreateEventRequest,
        image_id: Option<&str>,
        created_by: &str,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, domain, venue, starts_at, ends_at, image_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING event_id, title, description, domain, venue, starts_at, ends_at,
                      image_id, created_by, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.domain)
        .bind(&req.venue)
        .bind(req.starts_at)
        .bind(req.ends_at)
        .bind(image_id)
        .bind(created_by)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    pub async fn list(&self, domain: Option<Domain>) -> Result<Vec<Event>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT event_id, title, description, domain, venue, starts_at, ends_at,
                   image_id, created_by, created_at
            FROM events
            WHERE 1=1
            "#,
        );

        if let Some(domain) = domain {
            query.push(" AND domain = ");
            query.push_bind(domain);
        }

        query.push(" ORDER BY starts_at");

        let events = query.build_query_as::<Event>().fetch_all(self.pool).await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, domain, venue, starts_at, ends_at,
                   image_id, created_by, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Merge the update over the existing row; `image_id` is the already
    /// resolved final value (the caller owns the upload/delete exchange
    /// with the image host).
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Event,
        req: &UpdateEventRequest,
        image_id: Option<String>,
    ) -> Result<Event> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let description = req.description.as_ref().unwrap_or(&existing.description);
        let domain = req.domain.unwrap_or(existing.domain);
        let venue = req.venue.as_ref().unwrap_or(&existing.venue);
        let starts_at = req.starts_at.unwrap_or(existing.starts_at);
        let ends_at = req.ends_at.unwrap_or(existing.ends_at);

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2,
                description = $3,
                domain = $4,
                venue = $5,
                starts_at = $6,
                ends_at = $7,
                image_id = $8
            WHERE event_id = $1
            RETURNING event_id, title, description, domain, venue, starts_at, ends_at,
                      image_id, created_by, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(domain)
        .bind(venue)
        .bind(starts_at)
        .bind(ends_at)
        .bind(image_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Delete and return the row so the caller can clean up the hosted
    /// image afterwards.
    pub async fn delete(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            DELETE FROM events
            WHERE event_id = $1
            RETURNING event_id, title, description, domain, venue, starts_at, ends_at,
                      image_id, created_by, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}

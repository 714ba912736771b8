use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::meeting::{CreateMeetingRequest, UpdateMeetingRequest};
use crate::error::{Result, StorageError};
use crate::models::Meeting;

pub struct MeetingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MeetingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        req: &CreateMeetingRequest,
        attendees: Vec<String>,
        created_by: &str,
    ) -> Result<Meeting> {
        let meeting = sqlx::query_as::<_, Meeting>(
            r#"
            INSERT INTO meetings (title, agenda, venue, scheduled_at, attendee_groups, attendees, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING meeting_id, title, agenda, venue, scheduled_at, attendee_groups,
                      attendees, created_by, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.agenda)
        .bind(&req.venue)
        .bind(req.scheduled_at)
        .bind(Json(req.groups.clone()))
        .bind(Json(attendees))
        .bind(created_by)
        .fetch_one(self.pool)
        .await?;

        Ok(meeting)
    }

    /// Meetings the user attends or convenes, soonest first.
    pub async fn list_for_user(&self, uid: &str) -> Result<Vec<Meeting>> {
        let meetings = sqlx::query_as::<_, Meeting>(
            r#"
            SELECT meeting_id, title, agenda, venue, scheduled_at, attendee_groups,
                   attendees, created_by, created_at
            FROM meetings
            WHERE attendees @> to_jsonb($1::text) OR created_by = $1
            ORDER BY scheduled_at
            "#,
        )
        .bind(uid)
        .fetch_all(self.pool)
        .await?;

        Ok(meetings)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Meeting> {
        let meeting = sqlx::query_as::<_, Meeting>(
            r#"
            SELECT meeting_id, title, agenda, venue, scheduled_at, attendee_groups,
                   attendees, created_by, created_at
            FROM meetings
            WHERE meeting_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(meeting)
    }

    /// Merge the update over the existing row. `attendees` is `Some` only
    /// when the group tokens changed and were re-resolved by the caller.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Meeting,
        req: &UpdateMeetingRequest,
        attendees: Option<Vec<String>>,
    ) -> Result<Meeting> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let agenda = req.agenda.as_ref().unwrap_or(&existing.agenda);
        let venue = req.venue.as_ref().unwrap_or(&existing.venue);
        let scheduled_at = req.scheduled_at.unwrap_or(existing.scheduled_at);
        let groups = req.groups.clone().unwrap_or_else(|| existing.attendee_groups.0.clone());
        let attendees = attendees.unwrap_or_else(|| existing.attendees.0.clone());

        let meeting = sqlx::query_as::<_, Meeting>(
            r#"
            UPDATE meetings
            SET title = $2,
                agenda = $3,
                venue = $4,
                scheduled_at = $5,
                attendee_groups = $6,
                attendees = $7
            WHERE meeting_id = $1
            RETURNING meeting_id, title, agenda, venue, scheduled_at, attendee_groups,
                      attendees, created_by, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(agenda)
        .bind(venue)
        .bind(scheduled_at)
        .bind(Json(groups))
        .bind(Json(attendees))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(meeting)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM meetings WHERE meeting_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

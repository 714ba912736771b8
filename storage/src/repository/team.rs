use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::{AwardPointsRequest, CreateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::{PointsEntry, Team};

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, group_name, semester)
            VALUES ($1, $2, $3)
            RETURNING team_id, name, group_name, semester, total_points, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.group_name)
        .bind(req.semester)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Team name already exists".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(team)
    }

    /// Leaderboard ordering: highest total first, name as tiebreak.
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, group_name, semester, total_points, created_at
            FROM teams
            ORDER BY total_points DESC, name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, group_name, semester, total_points, created_at
            FROM teams
            WHERE team_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Award log in append order.
    pub async fn list_points(&self, team_id: Uuid) -> Result<Vec<PointsEntry>> {
        let entries = sqlx::query_as::<_, PointsEntry>(
            r#"
            SELECT entry_id, team_id, event_id, points, position, reason, awarded_by, awarded_at
            FROM team_event_points
            WHERE team_id = $1
            ORDER BY awarded_at, entry_id
            "#,
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Apply an award: bump the running total and append the log entry in
    /// one transaction so the pair can never diverge under concurrent
    /// awards. Not-found rolls back before anything is written.
    pub async fn award_points(
        &self,
        team_id: Uuid,
        req: &AwardPointsRequest,
        awarded_by: &str,
    ) -> Result<(Team, PointsEntry)> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET total_points = total_points + $2
            WHERE team_id = $1
            RETURNING team_id, name, group_name, semester, total_points, created_at
            "#,
        )
        .bind(team_id)
        .bind(req.points)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let entry = sqlx::query_as::<_, PointsEntry>(
            r#"
            INSERT INTO team_event_points (team_id, event_id, points, position, reason, awarded_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING entry_id, team_id, event_id, points, position, reason, awarded_by, awarded_at
            "#,
        )
        .bind(team_id)
        .bind(&req.event_id)
        .bind(req.points)
        .bind(req.position)
        .bind(&req.reason)
        .bind(awarded_by)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((team, entry))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

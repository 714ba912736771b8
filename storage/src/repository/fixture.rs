use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::fixture::CreateFixtureRequest;
use crate::error::{Result, StorageError};
use crate::models::{Fixture, FixtureStatus};

pub struct FixtureRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FixtureRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateFixtureRequest) -> Result<Fixture> {
        let fixture = sqlx::query_as::<_, Fixture>(
            r#"
            INSERT INTO fixtures (sport, home_team_id, away_team_id, venue, scheduled_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING fixture_id, sport, home_team_id, away_team_id, venue, scheduled_at,
                      status, result, created_at
            "#,
        )
        .bind(&req.sport)
        .bind(req.home_team_id)
        .bind(req.away_team_id)
        .bind(&req.venue)
        .bind(req.scheduled_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23503") {
                    return StorageError::ConstraintViolation("Unknown team".to_string());
                }
            }
            StorageError::from(e)
        })?;

        Ok(fixture)
    }

    pub async fn list(&self) -> Result<Vec<Fixture>> {
        let fixtures = sqlx::query_as::<_, Fixture>(
            r#"
            SELECT fixture_id, sport, home_team_id, away_team_id, venue, scheduled_at,
                   status, result, created_at
            FROM fixtures
            ORDER BY scheduled_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(fixtures)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Fixture> {
        let fixture = sqlx::query_as::<_, Fixture>(
            r#"
            SELECT fixture_id, sport, home_team_id, away_team_id, venue, scheduled_at,
                   status, result, created_at
            FROM fixtures
            WHERE fixture_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(fixture)
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: FixtureStatus,
        result: Option<&str>,
    ) -> Result<Fixture> {
        let fixture = sqlx::query_as::<_, Fixture>(
            r#"
            UPDATE fixtures
            SET status = $2, result = $3
            WHERE fixture_id = $1
            RETURNING fixture_id, sport, home_team_id, away_team_id, venue, scheduled_at,
                      status, result, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(result)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(fixture)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM fixtures WHERE fixture_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

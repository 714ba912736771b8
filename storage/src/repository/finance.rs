use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::finance::CreateFinanceRequest;
use crate::error::{Result, StorageError};
use crate::models::{FinanceRequest, FinanceStatus};

pub struct FinanceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FinanceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        req: &CreateFinanceRequest,
        requested_by: &str,
    ) -> Result<FinanceRequest> {
        let request = sqlx::query_as::<_, FinanceRequest>(
            r#"
            INSERT INTO finance_requests (title, description, amount_cents, requested_by)
            VALUES ($1, $2, $3, $4)
            RETURNING request_id, title, description, amount_cents, status, requested_by,
                      reviewed_by, review_note, created_at, reviewed_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.amount_cents)
        .bind(requested_by)
        .fetch_one(self.pool)
        .await?;

        Ok(request)
    }

    pub async fn list_all(&self) -> Result<Vec<FinanceRequest>> {
        let requests = sqlx::query_as::<_, FinanceRequest>(
            r#"
            SELECT request_id, title, description, amount_cents, status, requested_by,
                   reviewed_by, review_note, created_at, reviewed_at
            FROM finance_requests
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn list_by_requester(&self, uid: &str) -> Result<Vec<FinanceRequest>> {
        let requests = sqlx::query_as::<_, FinanceRequest>(
            r#"
            SELECT request_id, title, description, amount_cents, status, requested_by,
                   reviewed_by, review_note, created_at, reviewed_at
            FROM finance_requests
            WHERE requested_by = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(uid)
        .fetch_all(self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<FinanceRequest> {
        let request = sqlx::query_as::<_, FinanceRequest>(
            r#"
            SELECT request_id, title, description, amount_cents, status, requested_by,
                   reviewed_by, review_note, created_at, reviewed_at
            FROM finance_requests
            WHERE request_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(request)
    }

    /// Settle a pending request. The status guard in the WHERE clause
    /// makes double reviews lose rather than overwrite.
    pub async fn review(
        &self,
        id: Uuid,
        status: FinanceStatus,
        reviewed_by: &str,
        note: Option<&str>,
    ) -> Result<FinanceRequest> {
        let reviewed = sqlx::query_as::<_, FinanceRequest>(
            r#"
            UPDATE finance_requests
            SET status = $2, reviewed_by = $3, review_note = $4, reviewed_at = now()
            WHERE request_id = $1 AND status = 'pending'
            RETURNING request_id, title, description, amount_cents, status, requested_by,
                      reviewed_by, review_note, created_at, reviewed_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(reviewed_by)
        .bind(note)
        .fetch_optional(self.pool)
        .await?;

        match reviewed {
            Some(request) => Ok(request),
            None => {
                // Distinguish "gone" from "already settled".
                self.find_by_id(id).await?;
                Err(StorageError::ConstraintViolation(
                    "Request has already been reviewed".to_string(),
                ))
            }
        }
    }

    pub async fn delete_pending(&self, id: Uuid, requested_by: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM finance_requests
            WHERE request_id = $1 AND requested_by = $2 AND status = 'pending'
            "#,
        )
        .bind(id)
        .bind(requested_by)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

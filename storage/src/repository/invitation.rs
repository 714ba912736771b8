use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Domain, Invitation, Role};

pub struct InvitationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InvitationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert with a caller-generated access code. A unique-violation on
    /// the code surfaces as `ConstraintViolation`; the caller regenerates
    /// and retries.
    pub async fn create(
        &self,
        email: &str,
        role: Role,
        domain: Option<Domain>,
        access_code: &str,
        invited_by: &str,
    ) -> Result<Invitation> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            INSERT INTO invitations (email, role, domain, access_code, invited_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING invitation_id, email, role, domain, access_code, invited_by,
                      status, accepted_by, created_at
            "#,
        )
        .bind(email)
        .bind(role)
        .bind(domain)
        .bind(access_code)
        .bind(invited_by)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Access code already in use".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(invitation)
    }

    pub async fn list(&self) -> Result<Vec<Invitation>> {
        let invitations = sqlx::query_as::<_, Invitation>(
            r#"
            SELECT invitation_id, email, role, domain, access_code, invited_by,
                   status, accepted_by, created_at
            FROM invitations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(invitations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Invitation> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            SELECT invitation_id, email, role, domain, access_code, invited_by,
                   status, accepted_by, created_at
            FROM invitations
            WHERE invitation_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(invitation)
    }

    /// Only pending invitations are redeemable.
    pub async fn find_pending_by_code(&self, access_code: &str) -> Result<Invitation> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            SELECT invitation_id, email, role, domain, access_code, invited_by,
                   status, accepted_by, created_at
            FROM invitations
            WHERE access_code = $1 AND status = 'pending'
            "#,
        )
        .bind(access_code)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(invitation)
    }

    pub async fn mark_accepted(&self, id: Uuid, accepted_by: &str) -> Result<Invitation> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            UPDATE invitations
            SET status = 'accepted', accepted_by = $2
            WHERE invitation_id = $1 AND status = 'pending'
            RETURNING invitation_id, email, role, domain, access_code, invited_by,
                      status, accepted_by, created_at
            "#,
        )
        .bind(id)
        .bind(accepted_by)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(invitation)
    }

    pub async fn revoke(&self, id: Uuid) -> Result<Invitation> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            UPDATE invitations
            SET status = 'revoked'
            WHERE invitation_id = $1 AND status = 'pending'
            RETURNING invitation_id, email, role, domain, access_code, invited_by,
                      status, accepted_by, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match invitation {
            Some(invitation) => Ok(invitation),
            None => {
                self.find_by_id(id).await?;
                Err(StorageError::ConstraintViolation(
                    "Invitation is no longer pending".to_string(),
                ))
            }
        }
    }
}

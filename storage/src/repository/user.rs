use sqlx::{PgPool, QueryBuilder};

use crate::error::{Result, StorageError};
use crate::models::{Domain, Role, User};
use crate::services::targeting::AttendeeGroup;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a user record for a verified identity.
    pub async fn create(
        &self,
        uid: &str,
        display_name: &str,
        email: &str,
        role: Role,
        domain: Option<Domain>,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (uid, display_name, email, role, domain)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING uid, display_name, email, role, domain, is_active, created_at
            "#,
        )
        .bind(uid)
        .bind(display_name)
        .bind(email)
        .bind(role)
        .bind(domain)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "User already registered".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(user)
    }

    pub async fn find_by_uid(&self, uid: &str) -> Result<User> {
        self.find_optional(uid).await?.ok_or(StorageError::NotFound)
    }

    pub async fn find_optional(&self, uid: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT uid, display_name, email, role, domain, is_active, created_at
            FROM users
            WHERE uid = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// List users, optionally narrowed by role and/or domain.
    pub async fn list(&self, role: Option<Role>, domain: Option<Domain>) -> Result<Vec<User>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT uid, display_name, email, role, domain, is_active, created_at
            FROM users
            WHERE 1=1
            "#,
        );

        if let Some(role) = role {
            query.push(" AND role = ");
            query.push_bind(role);
        }

        if let Some(domain) = domain {
            query.push(" AND domain = ");
            query.push_bind(domain);
        }

        query.push(" ORDER BY display_name, uid");

        let users = query.build_query_as::<User>().fetch_all(self.pool).await?;

        Ok(users)
    }

    pub async fn list_active(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT uid, display_name, email, role, domain, is_active, created_at
            FROM users
            WHERE is_active
            ORDER BY display_name, uid
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn update_role(
        &self,
        uid: &str,
        role: Role,
        domain: Option<Domain>,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $2, domain = $3
            WHERE uid = $1
            RETURNING uid, display_name, email, role, domain, is_active, created_at
            "#,
        )
        .bind(uid)
        .bind(role)
        .bind(domain)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn set_active(&self, uid: &str, is_active: bool) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_active = $2
            WHERE uid = $1
            RETURNING uid, display_name, email, role, domain, is_active, created_at
            "#,
        )
        .bind(uid)
        .bind(is_active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Expand parsed attendee groups into the uids of matching active
    /// users. An empty group list resolves to an empty list without
    /// touching the database; `AllUsers` short-circuits every other group.
    /// Otherwise a single query carries the full disjunction.
    pub async fn find_uids_in_groups(&self, groups: &[AttendeeGroup]) -> Result<Vec<String>> {
        if groups.is_empty() {
            return Ok(Vec::new());
        }

        if groups.contains(&AttendeeGroup::AllUsers) {
            let uids = sqlx::query_scalar::<_, String>(
                "SELECT uid FROM users WHERE is_active ORDER BY uid",
            )
            .fetch_all(self.pool)
            .await?;

            return Ok(uids);
        }

        let mut query = QueryBuilder::new("SELECT uid FROM users WHERE is_active AND (");

        let mut first = true;
        for group in groups {
            let (role, domain) = match group {
                AttendeeGroup::AllUsers => continue,
                AttendeeGroup::RoleOnly(role) => (*role, None),
                AttendeeGroup::RoleDomain(role, domain) => (*role, Some(*domain)),
            };

            if !first {
                query.push(" OR ");
            }
            first = false;

            query.push("(role = ");
            query.push_bind(role);
            if let Some(domain) = domain {
                query.push(" AND domain = ");
                query.push_bind(domain);
            }
            query.push(")");
        }

        query.push(") ORDER BY uid");

        let uids = query
            .build_query_scalar::<String>()
            .fetch_all(self.pool)
            .await?;

        Ok(uids)
    }
}

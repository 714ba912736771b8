use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{Domain, Role};

/// A broadcast to the audience selected by `target_roles`/`target_domains`.
/// An empty list on either dimension leaves that dimension unconstrained.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    pub announcement_id: Uuid,
    pub title: String,
    pub body: String,
    pub target_roles: Json<Vec<Role>>,
    pub target_domains: Json<Vec<Domain>>,
    pub created_by: String,
    pub created_at: chrono::NaiveDateTime,
}

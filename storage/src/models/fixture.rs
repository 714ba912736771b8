use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "fixture_status", rename_all = "snake_case")]
pub enum FixtureStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fixture {
    pub fixture_id: Uuid,
    pub sport: String,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub venue: String,
    pub scheduled_at: chrono::NaiveDateTime,
    pub status: FixtureStatus,
    pub result: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
